//! Functions to construct [`Integer`]s, [`Rational`]s, and [`Float`]s from various types.

use rug::{ops::Pow, Assign, Float, Integer, Rational};

/// The number of bits of precision to use when computing inexact values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Parses a decimal literal, such as `12`, `-0.25`, or `.5`, into an exact [`Rational`].
///
/// Returns [`None`] if the string is not a plain decimal literal. Exponent notation is not
/// accepted.
pub fn rational_from_str(s: &str) -> Option<Rational> {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let numer = format!("{}{}", whole, frac).parse::<Integer>().ok()?;
    let denom = int(10).pow(u32::try_from(frac.len()).ok()?);
    let value = Rational::from((numer, denom));
    Some(if negative { -value } else { value })
}

/// Returns the number of digits after the decimal point needed to write the given [`Rational`]
/// exactly, or [`None`] if its decimal expansion does not terminate.
pub fn decimal_places(r: &Rational) -> Option<u32> {
    let mut denom = r.denom().clone();
    let twos = denom.remove_factor_mut(&int(2));
    let fives = denom.remove_factor_mut(&int(5));
    if denom == 1 {
        Some(twos.max(fives))
    } else {
        None
    }
}

/// Formats a [`Rational`] with a terminating decimal expansion as a decimal string, such as
/// `0.25` or `-3`. Returns [`None`] if the expansion does not terminate.
pub fn fmt_decimal(r: &Rational) -> Option<String> {
    let places = decimal_places(r)?;
    if places == 0 {
        return Some(r.numer().to_string());
    }

    let scaled = (r.numer() * int(10).pow(places)) / r.denom();
    let sign = if scaled < 0 { "-" } else { "" };
    let digits = scaled.abs().to_string();
    let places = places as usize;
    let digits = if digits.len() <= places {
        format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (whole, frac) = digits.split_at(digits.len() - places);
    Some(format!("{}{}.{}", sign, whole, frac))
}
