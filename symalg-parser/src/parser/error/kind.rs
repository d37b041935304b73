use ariadne::Fmt;
use symalg_attrs::ErrorKind;
use symalg_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "every binary operation must be wrapped in its own pair of parentheses",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A parenthesized group did not contain an operator between its two operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = [format!("expected one of `+`, `-`, `*`, `/`, or `**` here, found {:?}", found)],
    help = format!("a parenthesized group must be written as {}", "(left OP right)".fg(EXPR)),
)]
pub struct MissingOperator {
    /// The token that was found instead of an operator.
    pub found: TokenKind,
}

/// A parenthesized group contains more than two operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "too many operands in parenthesized group",
    labels = ["this operand is extra"],
    help = format!("wrap each operation in its own parentheses, such as {}", "((a + b) + c)".fg(EXPR)),
)]
pub struct ExtraOperand;

/// A number or variable was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an operand",
    labels = [format!("expected a number, variable, or parenthesized group here, found {:?}", found)],
)]
pub struct ExpectedOperand {
    /// The token that was found.
    pub found: TokenKind,
}

/// A number literal could not be converted into a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number literal `{}`", literal),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The literal as written in the source code.
    pub literal: String,
}
