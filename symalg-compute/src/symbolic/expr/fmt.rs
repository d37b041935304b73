use std::fmt::{Display, Formatter, Result};
use symalg_parser::parser::token::op::Associativity;
use super::{BinOpKind, Expr};

impl Display for Expr {
    /// Formats the expression in the fully parenthesized notation, where every binary operation
    /// is wrapped in its own pair of parentheses. The output can be parsed back into an equal
    /// expression.
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

/// Returns true if `inner`, as the left or right operand of `op`, must be parenthesized to keep
/// its grouping when written without full parentheses.
fn needs_paren(op: BinOpKind, inner: &Expr, is_right: bool) -> bool {
    match inner {
        Expr::Variable(_) => false,
        // `-2 ** 2` reads as `-(2 ** 2)`
        Expr::Number(n) => !is_right && op == BinOpKind::Pow && n.is_negative(),
        Expr::Binary { op: inner_op, .. } => {
            let (outer, inner) = (op.precedence(), inner_op.precedence());
            if inner != outer {
                return inner < outer;
            }

            match op.associativity() {
                Associativity::Right => !is_right,
                Associativity::Left => is_right && matches!(op, BinOpKind::Sub | BinOpKind::Div),
            }
        },
    }
}

/// A wrapper type that formats an [`Expr`] with only the parentheses needed to preserve its
/// grouping, such as `2 * x + 1`. This output is meant for humans and is not accepted by the
/// parser.
///
/// This type is created by [`Expr::pretty`].
pub struct Pretty<'a>(&'a Expr);

impl Expr {
    /// Returns a value that formats this expression with minimal parentheses.
    ///
    /// ```
    /// use symalg_compute::symbolic::expr::parse;
    ///
    /// let expr = parse("((x - (y - 1)) * (x ** 2))").unwrap();
    /// assert_eq!(expr.pretty().to_string(), "(x - (y - 1)) * x ** 2");
    /// ```
    pub fn pretty(&self) -> Pretty<'_> {
        Pretty(self)
    }
}

impl Pretty<'_> {
    fn fmt_operand(f: &mut Formatter, op: BinOpKind, operand: &Expr, is_right: bool) -> Result {
        if needs_paren(op, operand, is_right) {
            write!(f, "({})", Pretty(operand))
        } else {
            write!(f, "{}", Pretty(operand))
        }
    }
}

impl Display for Pretty<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.0 {
            Expr::Binary { op, left, right } => {
                Self::fmt_operand(f, *op, left, false)?;
                write!(f, " {} ", op)?;
                Self::fmt_operand(f, *op, right, true)
            },
            leaf => write!(f, "{}", leaf),
        }
    }
}

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats an operand as LaTeX, wrapping it in `\left(` and `\right)` when needed.
fn fmt_latex_operand(f: &mut Formatter, op: BinOpKind, operand: &Expr, is_right: bool) -> Result {
    if needs_paren(op, operand, is_right) {
        write!(f, "\\left(")?;
        operand.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        operand.fmt_latex(f)
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Binary { op: BinOpKind::Div, left, right } => {
                write!(f, "\\frac{{")?;
                left.fmt_latex(f)?;
                write!(f, "}}{{")?;
                right.fmt_latex(f)?;
                write!(f, "}}")
            },
            Expr::Binary { op: BinOpKind::Pow, left, right } => {
                // the exponent is already grouped by the braces
                fmt_latex_operand(f, BinOpKind::Pow, left, false)?;
                write!(f, "^{{")?;
                right.fmt_latex(f)?;
                write!(f, "}}")
            },
            Expr::Binary { op, left, right } => {
                let symbol = match op {
                    BinOpKind::Mul => "\\cdot",
                    other => other.symbol(),
                };
                fmt_latex_operand(f, *op, left, false)?;
                write!(f, " {} ", symbol)?;
                fmt_latex_operand(f, *op, right, true)
            },
        }
    }
}
