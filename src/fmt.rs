//! Human readable number formatting

use std::fmt::Display;
use std::sync::LazyLock;

use itertools::Itertools as _;

/// SI prefix table entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiPrefix {
    /// Power of ten
    pub exponent: i32,
    /// Prefix symbol, empty for exponent 0
    pub symbol: &'static str,
    /// 10^exponent
    pub factor: f64,
}

const fn prefix(exponent: i32, symbol: &'static str, factor: f64) -> SiPrefix {
    SiPrefix {
        exponent,
        symbol,
        factor,
    }
}

/// Prefixes for values >= 1, largest first
pub const LARGE_PREFIXES: [SiPrefix; 8] = [
    prefix(21, "Y", 1e21),
    prefix(18, "E", 1e18),
    prefix(15, "P", 1e15),
    prefix(12, "T", 1e12),
    prefix(9, "G", 1e9),
    prefix(6, "M", 1e6),
    prefix(3, "k", 1e3),
    prefix(0, "", 1.0),
];

/// Prefixes for values < 1, largest first
pub const SMALL_PREFIXES: [SiPrefix; 9] = [
    prefix(0, "", 1.0),
    prefix(-3, "m", 1e-3),
    prefix(-6, "µ", 1e-6),
    prefix(-9, "n", 1e-9),
    prefix(-12, "p", 1e-12),
    prefix(-15, "f", 1e-15),
    prefix(-18, "a", 1e-18),
    prefix(-21, "z", 1e-21),
    prefix(-24, "y", 1e-24),
];

const UNIT_PREFIX: SiPrefix = prefix(0, "", 1.0);

/// Integer or fraction parts shorter than this are left alone
const SPACIFY_MIN_LEN: usize = 5;

static FRACTION_GROUP_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new("([0-9]{3})").unwrap());

/// Enough decimals to print any f64 exactly
const EXACT_DECIMALS: usize = 1100;

/// Increment the last digit of a decimal string by one, carrying to the left
fn increment_last_digit(digits: &str) -> String {
    let mut chars: Vec<char> = digits.chars().collect();
    let mut carry = true;
    for c in chars.iter_mut().rev() {
        match *c {
            '9' => *c = '0',
            '0'..='8' => {
                *c = char::from(*c as u8 + 1);
                carry = false;
                break;
            }
            _ => {}
        }
    }
    let s: String = chars.into_iter().collect();
    if carry {
        match s.strip_prefix('-') {
            Some(unsigned) => format!("-1{unsigned}"),
            None => format!("1{s}"),
        }
    } else {
        s
    }
}

/// Format value with exactly `places` decimals
///
/// Exact halves are rounded away from zero, so `2.5` gives `3` and `0.125` gives `0.13`.
/// Other values round to nearest.
pub fn format_fixed(value: f64, places: usize) -> String {
    let longer = format!("{:.*}", places + 1, value);
    let is_tie = longer.ends_with('5')
        && format!("{:.*}", EXACT_DECIMALS, value).trim_end_matches('0') == longer;
    if !is_tie {
        return format!("{value:.places$}");
    }
    let mut truncated = longer;
    truncated.pop();
    if truncated.ends_with('.') {
        truncated.pop();
    }
    increment_last_digit(&truncated)
}

/// Pick the largest prefix whose factor does not exceed `abs_value`
fn select_prefix(abs_value: f64, prefixes: &[SiPrefix]) -> SiPrefix {
    prefixes
        .iter()
        .find(|p| abs_value >= p.factor)
        .copied()
        .unwrap_or(UNIT_PREFIX)
}

fn format_scaled(
    value: f64,
    unit: &str,
    fixed_places: Option<usize>,
    prefixes: &[SiPrefix],
) -> String {
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let abs_value = value.abs();
    let si_prefix = select_prefix(abs_value, prefixes);
    let scaled = abs_value / si_prefix.factor * sign;
    match fixed_places {
        Some(places) => format!(
            "{} {}{}",
            format_fixed(scaled, places),
            si_prefix.symbol,
            unit
        ),
        None => format!("{} {}{}", scaled, si_prefix.symbol, unit),
    }
}

/// Format value with k/M/G/T/P/E/Y prefix
///
/// The largest prefix the absolute value reaches is used, so 1000 gives `1 k<unit>`.
/// Values below 1 get no prefix.
/// If `fixed_places` is set, exactly that many decimals are printed.
pub fn value_to_magnitude(value: f64, unit: &str, fixed_places: Option<usize>) -> String {
    format_scaled(value, unit, fixed_places, &LARGE_PREFIXES)
}

/// Format value with m/µ/n/p/f/a/z/y prefix
///
/// Values of 1 or more, and values too small for any prefix, are printed without prefix.
pub fn value_to_small_magnitude(value: f64, unit: &str, fixed_places: Option<usize>) -> String {
    format_scaled(value, unit, fixed_places, &SMALL_PREFIXES)
}

/// Format frequency in Hz
pub fn hz_to_human(value: f64, fixed_places: Option<usize>) -> String {
    value_to_magnitude(value, "Hz", fixed_places)
}

/// Group integer digits by 3 from the right, sign excluded
fn group_integer_part(int_part: &str, separator: &str) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return int_part.to_owned();
    }
    let chars: Vec<char> = digits.chars().collect();
    let grouped = chars
        .rchunks(3)
        .rev()
        .map(|c| c.iter().collect::<String>())
        .join(separator);
    format!("{sign}{grouped}")
}

/// Insert `separator` every 3 digits in the integer part of `num`
///
/// Only parts of at least 5 characters are grouped, the minus sign counting toward that length.
/// Fraction digits are grouped by 3 from the left with a plain space appended after each
/// complete group, whatever `separator` is.
pub fn spacify<T: Display>(num: T, separator: &str) -> String {
    let s = num.to_string();
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let int_str = if int_part.len() >= SPACIFY_MIN_LEN {
        group_integer_part(int_part, separator)
    } else {
        int_part.to_owned()
    };

    match frac_part {
        Some(f) if f.len() >= SPACIFY_MIN_LEN => {
            format!("{}.{}", int_str, FRACTION_GROUP_RE.replace_all(f, "${1} "))
        }
        Some(f) => format!("{int_str}.{f}"),
        None => int_str,
    }
}
