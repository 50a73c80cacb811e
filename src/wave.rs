//! Frequency / wavelength conversion

use crate::fmt;

/// Speed of light in m/s
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Convert frequency in Hz to wavelength in meters
pub fn frequency_to_wavelength(frequency_hz: f64) -> f64 {
    SPEED_OF_LIGHT / frequency_hz
}

/// Convert wavelength in meters to frequency in Hz
pub fn wavelength_to_frequency(wavelength_m: f64) -> f64 {
    SPEED_OF_LIGHT / wavelength_m
}

/// Format the wavelength of a frequency in Hz, ie. `211 mm` for 1.42 GHz
pub fn wavelength_to_human(frequency_hz: f64, fixed_places: Option<usize>) -> String {
    let wavelength_m = frequency_to_wavelength(frequency_hz);
    if wavelength_m.abs() >= 1.0 {
        fmt::value_to_magnitude(wavelength_m, "m", fixed_places)
    } else {
        fmt::value_to_small_magnitude(wavelength_m, "m", fixed_places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_to_wavelength() {
        assert_eq!(frequency_to_wavelength(SPEED_OF_LIGHT), 1.0);
        assert_eq!(frequency_to_wavelength(1.0), SPEED_OF_LIGHT);
        assert_eq!(frequency_to_wavelength(-SPEED_OF_LIGHT), -1.0);
        assert_eq!(frequency_to_wavelength(0.0), f64::INFINITY);
        assert_eq!(frequency_to_wavelength(-0.0), f64::NEG_INFINITY);
        assert!(frequency_to_wavelength(f64::NAN).is_nan());
    }

    #[test]
    fn test_wavelength_to_frequency() {
        assert_eq!(wavelength_to_frequency(1.0), 299_792_458.0);
        assert_eq!(wavelength_to_frequency(SPEED_OF_LIGHT), 1.0);
        assert_eq!(wavelength_to_frequency(0.0), f64::INFINITY);
        assert_eq!(wavelength_to_frequency(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_round_trip() {
        for x in [1e-12, 0.21, 1.0, 3.5, 1_420_405_751.0, -7.25, 1e18] {
            let back = frequency_to_wavelength(wavelength_to_frequency(x));
            assert!((back - x).abs() <= x.abs() * 1e-12, "{x} -> {back}");
        }
    }

    #[test]
    fn test_wavelength_to_human() {
        assert_eq!(wavelength_to_human(1_420_405_751.0, Some(0)), "211 mm");
        assert_eq!(wavelength_to_human(SPEED_OF_LIGHT, None), "1 m");
        assert_eq!(wavelength_to_human(100_000.0, Some(2)), "3.00 km");
        assert_eq!(wavelength_to_human(5e14, Some(0)), "600 nm");
        assert_eq!(wavelength_to_human(0.0, None), "inf Ym");
    }
}
