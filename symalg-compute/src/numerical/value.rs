use crate::primitive::{float, fmt_decimal, decimal_places, rational, rational_from_str};
use rug::{ops::Pow, Float, Integer, Rational};
use std::{fmt::{self, Display, Formatter}, ops::{Add, Mul, Neg, Sub}};
use super::error::kind::InvalidExponent;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest number of bits an exact power is allowed to produce before the computation is
/// rejected.
const MAX_POW_BITS: u64 = 1 << 24;

/// A number, the value of every leaf and every evaluated expression.
///
/// Numbers are kept exact whenever possible. Literals such as `0.1` are parsed directly into the
/// [`Rational`] `1/10`, and arithmetic between exact numbers stays exact. A [`Float`] is only
/// produced when no exact result exists, for example by `2 ** 0.5`.
///
/// Two numbers compare equal if they have the same value, regardless of representation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// An exact rational number.
    Rational(Rational),

    /// An approximate floating-point number, with [`PRECISION`](crate::primitive::PRECISION) bits
    /// of precision.
    Float(Float),
}

impl Number {
    /// The number zero.
    pub fn zero() -> Self {
        Number::Rational(Rational::new())
    }

    /// The number one.
    pub fn one() -> Self {
        Number::Rational(rational(1))
    }

    /// Parses a decimal literal, such as `12` or `-0.25`, into an exact number.
    pub fn from_decimal(s: &str) -> Option<Self> {
        rational_from_str(s).map(Number::Rational)
    }

    /// Returns true if this number is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Rational(r) => *r.numer() == 0,
            Number::Float(f) => f.is_zero(),
        }
    }

    /// Returns true if this number is exactly one.
    pub fn is_one(&self) -> bool {
        match self {
            Number::Rational(r) => *r == 1,
            Number::Float(f) => *f == 1,
        }
    }

    /// Returns true if this number is less than zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Rational(r) => *r.numer() < 0,
            Number::Float(f) => *f < 0,
        }
    }

    /// Returns true if this number is an integer.
    pub fn is_integer(&self) -> bool {
        match self {
            Number::Rational(r) => *r.denom() == 1,
            Number::Float(f) => f.is_integer(),
        }
    }

    /// Returns true if this number is stored exactly.
    pub fn is_exact(&self) -> bool {
        matches!(self, Number::Rational(_))
    }

    /// Returns true if this number is exact and can be written as a terminating decimal, such as
    /// `0.125`. `1/3` is exact, but not terminating.
    pub fn is_terminating(&self) -> bool {
        match self {
            Number::Rational(r) => decimal_places(r).is_some(),
            Number::Float(_) => false,
        }
    }

    /// Returns true if this number can be written as a numeric literal, which is the case for
    /// every float and every terminating rational.
    pub fn is_representable(&self) -> bool {
        match self {
            Number::Rational(_) => self.is_terminating(),
            Number::Float(_) => true,
        }
    }

    /// Converts this number to a [`Float`], losing precision if it is a rational.
    pub fn to_float(&self) -> Float {
        match self {
            Number::Rational(r) => float(r),
            Number::Float(f) => f.clone(),
        }
    }

    /// Converts this number to the nearest [`f64`].
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Rational(r) => r.to_f64(),
            Number::Float(f) => f.to_f64(),
        }
    }

    /// Divides this number by another, returning [`None`] if the divisor is zero.
    pub fn checked_div(&self, rhs: &Number) -> Option<Number> {
        if rhs.is_zero() {
            return None;
        }

        Some(match (self, rhs) {
            (Number::Rational(a), Number::Rational(b)) => Number::Rational(Rational::from(a / b)),
            _ => Number::Float(self.to_float() / rhs.to_float()),
        })
    }

    /// Raises this number to the given power.
    ///
    /// The result is exact if both numbers are exact and an exact result exists: any integer
    /// power, or a fractional power `p/q` of a base whose numerator and denominator are perfect
    /// `q`th powers (such as `4 ** 0.5`). Otherwise, the power is computed with floats.
    ///
    /// `0 ** 0` is `1`. Zero raised to a negative power, and a negative base raised to a
    /// non-integer power, return an [`InvalidExponent`] error.
    pub fn pow(&self, exp: &Number) -> Result<Number, InvalidExponent> {
        match (self, exp) {
            (Number::Rational(base), Number::Rational(exp)) => rational_pow(base, exp),
            _ => float_pow(self.to_float(), exp.to_float()),
        }
    }
}

/// Returns the exact `n`th root of `r`, if there is one.
fn exact_root(r: &Rational, n: u32) -> Option<Rational> {
    let root_of = |i: &Integer| {
        let root = i.clone().root(n);
        if root.clone().pow(n) == *i {
            Some(root)
        } else {
            None
        }
    };

    Some(Rational::from((root_of(r.numer())?, root_of(r.denom())?)))
}

/// Returns true if raising `base` to the power `exp` would produce an unreasonably large result.
fn pow_too_large(base: &Rational, exp: i32) -> bool {
    // 0, 1, and -1 stay small under any power
    if *base.denom() == 1 && base.numer().significant_bits() <= 1 {
        return false;
    }

    let bits = base.numer().significant_bits().max(base.denom().significant_bits());
    u64::from(bits) * u64::from(exp.unsigned_abs()) > MAX_POW_BITS
}

/// Raises `base` to an integer power.
fn integer_pow(base: &Rational, exp: &Integer) -> Result<Number, InvalidExponent> {
    if let Some(p) = exp.to_i32() {
        if pow_too_large(base, p) {
            return Err(InvalidExponent::TOO_LARGE);
        }
        return Ok(Number::Rational(base.clone().pow(p)));
    }

    // only 0, 1, and -1 survive an exponent this large
    match base.denom().to_i32().zip(base.numer().to_i32()) {
        Some((1, 0)) => Ok(Number::zero()),
        Some((1, 1)) => Ok(Number::one()),
        Some((1, -1)) if exp.is_even() => Ok(Number::one()),
        Some((1, -1)) => Ok(Number::from(-1)),
        _ => Err(InvalidExponent::TOO_LARGE),
    }
}

fn rational_pow(base: &Rational, exp: &Rational) -> Result<Number, InvalidExponent> {
    if *base.numer() == 0 && *exp.numer() < 0 {
        return Err(InvalidExponent::ZERO_TO_NEGATIVE);
    }

    if *exp.denom() == 1 {
        return integer_pow(base, exp.numer());
    }

    if *base.numer() < 0 {
        return Err(InvalidExponent::NOT_REAL);
    }

    let (Some(p), Some(q)) = (exp.numer().to_i32(), exp.denom().to_u32()) else {
        return float_pow(float(base), float(exp));
    };
    match exact_root(base, q) {
        Some(root) if !pow_too_large(&root, p) => Ok(Number::Rational(root.pow(p))),
        _ => float_pow(float(base), float(exp)),
    }
}

fn float_pow(base: Float, exp: Float) -> Result<Number, InvalidExponent> {
    if base.is_zero() && exp < 0 {
        return Err(InvalidExponent::ZERO_TO_NEGATIVE);
    }
    if base < 0 && !exp.is_integer() {
        return Err(InvalidExponent::NOT_REAL);
    }

    let result = base.pow(&exp);
    if result.is_finite() {
        Ok(Number::Float(result))
    } else {
        Err(InvalidExponent::TOO_LARGE)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Rational(a), Number::Rational(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Float(a), Number::Rational(b)) | (Number::Rational(b), Number::Float(a)) => a == b,
        }
    }
}

/// Implements an arithmetic operator that is closed over both rationals and floats.
macro_rules! impl_arith {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&Number> for &Number {
            type Output = Number;

            fn $method(self, rhs: &Number) -> Number {
                match (self, rhs) {
                    (Number::Rational(a), Number::Rational(b)) => Number::Rational(Rational::from(a $op b)),
                    _ => Number::Float(self.to_float() $op rhs.to_float()),
                }
            }
        }

        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                &self $op &rhs
            }
        }
    };
}

impl_arith!(Add, add, +);
impl_arith!(Sub, sub, -);
impl_arith!(Mul, mul, *);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Rational(r) => Number::Rational(-r),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Rational(r) => match fmt_decimal(r) {
                Some(decimal) => write!(f, "{}", decimal),
                None => write!(f, "{}", r),
            },
            // rounded to the nearest f64, so floats beyond that precision do not round trip
            Number::Float(n) => write!(f, "{}", n.to_f64()),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Rational(rational(n))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Rational(rational(n))
    }
}

impl From<Integer> for Number {
    fn from(n: Integer) -> Self {
        Number::Rational(rational(n))
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Number::Rational(r)
    }
}

impl From<Float> for Number {
    fn from(f: Float) -> Self {
        Number::Float(f)
    }
}

/// Converts an [`f64`] into the exact number its shortest decimal representation denotes, so
/// that `0.1` becomes `1/10` rather than the nearest binary fraction.
///
/// Non-finite values are kept as floats. They display as `inf` or `NaN`, which are not number
/// literals, so an expression holding one does not survive a render and parse round trip.
impl From<f64> for Number {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            if let Some(number) = Number::from_decimal(&n.to_string()) {
                return number;
            }
        }
        Number::Float(float(n))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(s: &str) -> Number {
        Number::from_decimal(s).unwrap()
    }

    #[test]
    fn exact_arithmetic() {
        assert_eq!(&num("0.1") + &num("0.2"), num("0.3"));
        assert_eq!(&num("2.5") - &num("4"), num("-1.5"));
        assert_eq!(&num("1.5") * &num("-4"), Number::from(-6));
        assert!((&num("0.1") + &num("0.2")).is_exact());
    }

    #[test]
    fn mixed_arithmetic_uses_floats() {
        let sum = &Number::Float(float(0.5)) + &Number::from(1);
        assert!(!sum.is_exact());
        assert_eq!(sum, num("1.5"));
    }

    #[test]
    fn division() {
        assert_eq!(Number::from(1).checked_div(&Number::from(4)), Some(num("0.25")));
        assert_eq!(Number::from(1).checked_div(&Number::zero()), None);
        assert_eq!(Number::from(1).checked_div(&Number::Float(float(0))), None);

        let third = Number::from(1).checked_div(&Number::from(3)).unwrap();
        assert!(third.is_exact());
        assert!(!third.is_terminating());
        assert!(!third.is_representable());
    }

    #[test]
    fn integer_powers() {
        assert_eq!(Number::from(2).pow(&Number::from(10)).unwrap(), Number::from(1024));
        assert_eq!(Number::from(2).pow(&Number::from(-2)).unwrap(), num("0.25"));
        assert_eq!(Number::from(-3).pow(&Number::from(3)).unwrap(), Number::from(-27));
        assert_eq!(Number::zero().pow(&Number::zero()).unwrap(), Number::one());
        assert_eq!(Number::one().pow(&Number::from(i32::MAX)).unwrap(), Number::one());
    }

    #[test]
    fn fractional_powers() {
        let root = Number::from(4).pow(&num("0.5")).unwrap();
        assert!(root.is_exact());
        assert_eq!(root, Number::from(2));

        assert_eq!(num("0.25").pow(&num("1.5")).unwrap(), num("0.125"));

        let irrational = Number::from(2).pow(&num("0.5")).unwrap();
        assert!(!irrational.is_exact());
        assert!((irrational.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);

        // denominator of the exponent does not fit in a u32
        let tiny = Number::from(2).pow(&num("0.0000000001")).unwrap();
        assert!(!tiny.is_exact());
        assert!((tiny.to_f64() - 1.0000000000693147).abs() < 1e-14);
    }

    #[test]
    fn huge_integer_exponents() {
        assert_eq!(Number::one().pow(&num("5000000000")).unwrap(), Number::one());
        assert_eq!(Number::zero().pow(&num("3000000000")).unwrap(), Number::zero());
        assert_eq!(Number::from(-1).pow(&num("4000000000")).unwrap(), Number::one());
        assert_eq!(Number::from(-1).pow(&num("4000000001")).unwrap(), Number::from(-1));
        assert_eq!(Number::zero().pow(&num("-3000000000")), Err(InvalidExponent::ZERO_TO_NEGATIVE));
        assert_eq!(Number::from(2).pow(&num("5000000000")), Err(InvalidExponent::TOO_LARGE));
    }

    #[test]
    fn invalid_powers() {
        assert_eq!(Number::zero().pow(&Number::from(-1)), Err(InvalidExponent::ZERO_TO_NEGATIVE));
        assert_eq!(Number::from(-8).pow(&num("0.5")), Err(InvalidExponent::NOT_REAL));
        assert_eq!(Number::from(10).pow(&Number::from(i32::MAX)), Err(InvalidExponent::TOO_LARGE));
        assert_eq!(
            Number::Float(float(-2)).pow(&Number::Float(float(0.5))),
            Err(InvalidExponent::NOT_REAL),
        );
    }

    #[test]
    fn value_equality() {
        assert_eq!(Number::Float(float(0.25)), num("0.25"));
        assert_eq!(num("0.25"), Number::Float(float(0.25)));
        assert_ne!(num("0.1"), Number::Float(float(0.1)));
    }

    #[test]
    fn from_f64_is_exact() {
        assert_eq!(Number::from(0.1), num("0.1"));
        assert_eq!(Number::from(-2.5), num("-2.5"));
        assert!(Number::from(3.0).is_exact());
    }

    #[test]
    fn display() {
        assert_eq!(num("3").to_string(), "3");
        assert_eq!(num("-0.125").to_string(), "-0.125");
        assert_eq!(num("2.50").to_string(), "2.5");
        assert_eq!(Number::from(2).checked_div(&Number::from(3)).unwrap().to_string(), "2/3");
        assert_eq!(Number::Float(float(1.5)).to_string(), "1.5");
    }
}
