//! Format numbers from the command line

use anyhow::Context as _;
use clap::{Arg, ArgAction, ArgMatches, Command};

use viewer_fmt::config::{self, Config};
use viewer_fmt::{fmt, wave};

// Library dependencies
use itertools as _;
use regex as _;
use serde as _;
#[cfg(test)]
use serial_test as _;
use toml as _;
use xdg as _;

/// Positional numeric argument
fn value_arg(name: &'static str, help: &'static str) -> Arg<'static> {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(f64))
}

/// Decimal places option
fn places_arg() -> Arg<'static> {
    Arg::new("places")
        .short('p')
        .long("places")
        .help("Number of decimal places")
        .takes_value(true)
        .value_parser(clap::value_parser!(u8))
}

/// Option to print with SI prefix
fn human_arg() -> Arg<'static> {
    Arg::new("human")
        .short('H')
        .long("human")
        .help("Print with SI prefix and unit")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command<'static> {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log level")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("magnitude")
                .about("Format value with SI magnitude prefix")
                .allow_negative_numbers(true)
                .arg(value_arg("value", "Value to format"))
                .arg(
                    Arg::new("unit")
                        .short('u')
                        .long("unit")
                        .help("Unit suffix")
                        .takes_value(true)
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(places_arg())
                .arg(
                    Arg::new("small")
                        .short('s')
                        .long("small")
                        .help("Use milli to yocto prefixes")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("hz")
                .about("Format frequency in Hz")
                .allow_negative_numbers(true)
                .arg(value_arg("value", "Frequency in Hz"))
                .arg(places_arg()),
        )
        .subcommand(
            Command::new("wavelength")
                .about("Convert frequency to wavelength")
                .allow_negative_numbers(true)
                .arg(value_arg("frequency", "Frequency in Hz"))
                .arg(places_arg())
                .arg(human_arg()),
        )
        .subcommand(
            Command::new("frequency")
                .about("Convert wavelength to frequency")
                .allow_negative_numbers(true)
                .arg(value_arg("wavelength", "Wavelength in meters"))
                .arg(places_arg())
                .arg(human_arg()),
        )
        .subcommand(
            Command::new("spacify")
                .about("Group digits with separator")
                .allow_negative_numbers(true)
                .arg(value_arg("number", "Number to format"))
                .arg(
                    Arg::new("separator")
                        .short('S')
                        .long("separator")
                        .help("Integer digit group separator")
                        .takes_value(true)
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn setup_logger(verbosity: u64) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn get_value(matches: &ArgMatches, name: &str) -> anyhow::Result<f64> {
    matches
        .get_one::<f64>(name)
        .copied()
        .with_context(|| format!("Missing {name}"))
}

fn get_flag(matches: &ArgMatches, name: &str) -> bool {
    matches.get_one::<bool>(name).copied().unwrap_or(false)
}

fn get_places(matches: &ArgMatches, default: Option<usize>) -> Option<usize> {
    matches
        .get_one::<u8>("places")
        .map(|p| usize::from(*p))
        .or(default)
}

fn format_plain(value: f64, fixed_places: Option<usize>) -> String {
    match fixed_places {
        Some(places) => fmt::format_fixed(value, places),
        None => value.to_string(),
    }
}

/// Build output line for parsed command line
fn run(matches: &ArgMatches, config: &Config) -> anyhow::Result<String> {
    let default_places = config.magnitude.fixed_places;
    let line = match matches.subcommand() {
        Some(("magnitude", sub_matches)) => {
            let value = get_value(sub_matches, "value")?;
            let unit = sub_matches
                .get_one::<String>("unit")
                .unwrap_or(&config.magnitude.unit);
            let places = get_places(sub_matches, default_places);
            if get_flag(sub_matches, "small") {
                fmt::value_to_small_magnitude(value, unit, places)
            } else {
                fmt::value_to_magnitude(value, unit, places)
            }
        }
        Some(("hz", sub_matches)) => {
            let value = get_value(sub_matches, "value")?;
            fmt::hz_to_human(value, get_places(sub_matches, default_places))
        }
        Some(("wavelength", sub_matches)) => {
            let frequency_hz = get_value(sub_matches, "frequency")?;
            let places = get_places(sub_matches, default_places);
            if get_flag(sub_matches, "human") {
                wave::wavelength_to_human(frequency_hz, places)
            } else {
                format_plain(wave::frequency_to_wavelength(frequency_hz), places)
            }
        }
        Some(("frequency", sub_matches)) => {
            let wavelength_m = get_value(sub_matches, "wavelength")?;
            let places = get_places(sub_matches, default_places);
            let frequency_hz = wave::wavelength_to_frequency(wavelength_m);
            if get_flag(sub_matches, "human") {
                fmt::hz_to_human(frequency_hz, places)
            } else {
                format_plain(frequency_hz, places)
            }
        }
        Some(("spacify", sub_matches)) => {
            let number = get_value(sub_matches, "number")?;
            let separator = sub_matches
                .get_one::<String>("separator")
                .unwrap_or(&config.spacify.separator);
            fmt::spacify(number, separator)
        }
        Some((name, _)) => anyhow::bail!("Unknown subcommand {name:?}"),
        None => anyhow::bail!("No subcommand"),
    };
    log::debug!("{:?} -> {:?}", matches.subcommand_name(), line);
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    setup_logger(matches.get_one::<u64>("verbose").copied().unwrap_or(0));

    let config = config::parse_config()?;
    let line = run(&matches, &config)?;
    println!("{line}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use viewer_fmt::config::{MagnitudeConfig, SpacifyConfig};

    fn run_args(args: &[&str], config: &Config) -> String {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("viewer-fmt").chain(args.iter().copied()))
            .unwrap();
        run(&matches, config).unwrap()
    }

    #[test]
    fn test_build_cli() {
        build_cli().debug_assert();
        assert!(build_cli().try_get_matches_from(["viewer-fmt"]).is_err());
        assert!(build_cli()
            .try_get_matches_from(["viewer-fmt", "hz", "abc"])
            .is_err());
        assert!(build_cli()
            .try_get_matches_from(["viewer-fmt", "hz", "1", "-p", "-1"])
            .is_err());
    }

    #[test]
    fn test_run_magnitude() {
        let config = Config::default();
        assert_eq!(run_args(&["magnitude", "1000"], &config), "1 kHz");
        assert_eq!(
            run_args(&["magnitude", "-1500", "-p", "2"], &config),
            "-1.50 kHz"
        );
        assert_eq!(
            run_args(&["magnitude", "2000000", "--unit", "B"], &config),
            "2 MB"
        );
        assert_eq!(
            run_args(&["magnitude", "0.0015", "-s", "-u", "s", "-p", "1"], &config),
            "1.5 ms"
        );
        assert_eq!(run_args(&["hz", "5000000"], &config), "5 MHz");
    }

    #[test]
    fn test_run_wave() {
        let config = Config::default();
        assert_eq!(run_args(&["wavelength", "299792458"], &config), "1");
        assert_eq!(run_args(&["frequency", "1"], &config), "299792458");
        assert_eq!(
            run_args(&["frequency", "1", "--human", "-p", "1"], &config),
            "299.8 MHz"
        );
        assert_eq!(
            run_args(&["wavelength", "1420405751", "-H", "-p", "0"], &config),
            "211 mm"
        );
        assert_eq!(run_args(&["wavelength", "3", "-p", "2"], &config), "99930819.33");
        assert_eq!(run_args(&["frequency", "4"], &config), "74948114.5");
        assert_eq!(run_args(&["frequency", "4", "-p", "0"], &config), "74948115");
        assert_eq!(run_args(&["frequency", "-4", "-p", "0"], &config), "-74948115");
    }

    #[test]
    fn test_run_spacify() {
        let config = Config::default();
        assert_eq!(run_args(&["spacify", "12345"], &config), "12,345");
        assert_eq!(run_args(&["spacify", "-1234"], &config), "-1,234");
        assert_eq!(
            run_args(&["spacify", "1234.12345", "-S", " "], &config),
            "1234.123 45"
        );
    }

    #[test]
    fn test_run_config_defaults() {
        let config = Config {
            magnitude: MagnitudeConfig {
                unit: "W".to_owned(),
                fixed_places: Some(1),
            },
            spacify: SpacifyConfig {
                separator: "'".to_owned(),
            },
        };
        assert_eq!(run_args(&["magnitude", "1234"], &config), "1.2 kW");
        assert_eq!(run_args(&["magnitude", "1234", "-p", "0"], &config), "1 kW");
        assert_eq!(run_args(&["magnitude", "1234", "-u", "V"], &config), "1.2 kV");
        assert_eq!(run_args(&["hz", "1234"], &config), "1.2 kHz");
        assert_eq!(run_args(&["spacify", "1234567"], &config), "1'234'567");
        assert_eq!(run_args(&["spacify", "1234567", "-S", "."], &config), "1.234.567");
    }
}
