mod fmt;
mod iter;
mod ops;

use crate::numerical::value::Number;
use log::debug;
use std::{collections::BTreeSet, str::FromStr};
use symalg_parser::parser::{
    ast::{Expr as AstExpr, Literal},
    error::{kind::InvalidNumber, Error},
    Parser,
};

pub use fmt::{Latex, LatexFormatter, Pretty};
pub use iter::ExprIter;
pub use symalg_parser::parser::token::op::BinOpKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbolic expression: a binary tree whose leaves are numbers and variables.
///
/// Expressions are immutable values. Every operation on them, including evaluation,
/// differentiation, and simplification, returns a new tree and leaves its input untouched.
///
/// Two expressions are equal if they have the same shape, the same operators, and equal leaves.
/// No algebraic equivalence is attempted, so `(x + 1)` and `(1 + x)` are different expressions.
///
/// Expressions can be built directly, or with the arithmetic operators:
///
/// ```
/// use symalg_compute::symbolic::expr::Expr;
///
/// let expr = Expr::var("x") * 2 + 1;
/// assert_eq!(expr.to_string(), "((x * 2) + 1)");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant.
    Number(Number),

    /// A named variable, such as `x`.
    Variable(String),

    /// A binary operation applied to two operands.
    Binary {
        /// The operator.
        op: BinOpKind,

        /// The left operand.
        left: Box<Expr>,

        /// The right operand.
        right: Box<Expr>,
    },
}

impl Expr {
    /// Creates a numeric constant.
    pub fn number(n: impl Into<Number>) -> Self {
        Expr::Number(n.into())
    }

    /// Creates a variable with the given name.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Creates a binary operation.
    pub fn binary(op: BinOpKind, left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// Raises this expression to the given power.
    pub fn pow(self, exp: impl Into<Expr>) -> Self {
        Expr::binary(BinOpKind::Pow, self, exp)
    }

    /// If this expression is a number, returns a reference to it.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }

    /// If this expression is a variable, returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if this expression is the number zero.
    pub fn is_zero(&self) -> bool {
        self.as_number().map_or(false, Number::is_zero)
    }

    /// Returns true if this expression is the number one.
    pub fn is_one(&self) -> bool {
        self.as_number().map_or(false, Number::is_one)
    }

    /// Returns true if the given variable appears anywhere in this expression.
    pub fn contains_variable(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| expr.as_variable() == Some(name))
    }

    /// Returns the names of all variables in this expression, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter().filter_map(Expr::as_variable).collect()
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Renders the expression in the fully parenthesized notation accepted by [`parse`].
    ///
    /// Parsing the output gives back an equal expression whenever every number leaf is exact and
    /// terminating, or is a float that an [`f64`] holds exactly. This covers every tree that
    /// [`parse`] produces. A non-terminating rational such as `1/3` parses back as a division, a
    /// float with more precision than an [`f64`] loses it, and an infinite float is written as
    /// `inf`, which parses back as a variable.
    ///
    /// This is the same as the [`Display`](std::fmt::Display) implementation.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Converts a parsed expression into an [`Expr`].
///
/// This fails only if a number literal cannot be converted into an exact number, in which case
/// the error points at the literal.
impl TryFrom<AstExpr> for Expr {
    type Error = Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => match Number::from_decimal(&num.value) {
                Some(n) => Ok(Expr::Number(n)),
                None => Err(Error::new(vec![num.span], InvalidNumber { literal: num.value })),
            },
            AstExpr::Literal(Literal::Symbol(sym)) => Ok(Expr::Variable(sym.name)),
            AstExpr::Binary(binary) => Ok(Expr::Binary {
                op: binary.op.kind,
                left: Box::new(Self::try_from(*binary.lhs)?),
                right: Box::new(Self::try_from(*binary.rhs)?),
            }),
        }
    }
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses the fully parenthesized notation into an [`Expr`].
///
/// ```
/// use symalg_compute::symbolic::expr::{parse, Expr};
///
/// let expr = parse("((2 * x) + 1)").unwrap();
/// assert_eq!(expr, Expr::from(2) * "x" + 1);
/// ```
pub fn parse(source: &str) -> Result<Expr, Error> {
    debug!("parsing {:?}", source);
    let mut parser = Parser::new(source);
    let ast = parser.try_parse_full::<AstExpr>()?;
    Expr::try_from(ast)
}
