use ariadne::Fmt;
use symalg_attrs::ErrorKind;
use symalg_error::EXPR;

/// The exponent of a power depends on the variable of differentiation, such as in `(2 ** x)`.
///
/// Only the power rule for exponents that are constant with respect to the variable is supported.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}` with respect to `{}`", power, with),
    help = format!(
        "the exponent depends on `{}`; only exponents constant in `{}` can be differentiated",
        with.fg(EXPR),
        with,
    ),
)]
pub struct VariableExponent {
    /// The power that could not be differentiated, in the fully parenthesized notation.
    pub power: String,

    /// The variable of differentiation.
    pub with: String,
}
