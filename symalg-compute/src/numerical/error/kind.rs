use ariadne::Fmt;
use symalg_attrs::ErrorKind;
use symalg_error::EXPR;

/// A variable was used in an expression, but no value was bound to it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unbound variable: `{}`", name),
    help = if suggestions.is_empty() {
        format!("bind a value to it first, for example {}", format!("let {} = 2", name).fg(EXPR))
    } else {
        format!(
            "did you mean {}?",
            suggestions.iter().map(|s| format!("`{}`", s.fg(EXPR))).collect::<Vec<_>>().join(", "),
        )
    },
)]
pub struct UnboundVariable {
    /// The name of the variable that had no value.
    pub name: String,

    /// Bound variables with a similar name.
    pub suggestions: Vec<String>,
}

/// A division by zero occurred.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = "division by zero")]
pub struct DivisionByZero;

/// An exponentiation has no real, finite result.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(message = format!("invalid exponent: {}", reason))]
pub struct InvalidExponent {
    /// Why the power could not be computed.
    pub reason: &'static str,
}

impl InvalidExponent {
    /// Zero raised to a negative power.
    pub const ZERO_TO_NEGATIVE: Self = Self { reason: "zero cannot be raised to a negative power" };

    /// A negative base raised to a non-integer power.
    pub const NOT_REAL: Self = Self { reason: "a negative base raised to a non-integer power has no real value" };

    /// The result would be too large to represent.
    pub const TOO_LARGE: Self = Self { reason: "the result is too large to compute" };
}
