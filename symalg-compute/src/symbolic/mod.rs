//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a binary tree of [`Expr`] nodes. It's
//! similar to the [`symalg_parser::parser::ast::Expr`] nodes produced by [`symalg_parser`], with
//! the main difference being that [`Expr`] nodes do not carry span information, and their number
//! literals have been converted into exact [`Number`](crate::numerical::value::Number)s.
//!
//! If you have a [`symalg_parser::parser::ast::Expr`], you can convert it to an [`Expr`] using the
//! [`TryFrom`] trait, or parse source text directly with [`parse`](expr::parse()):
//!
//! ```
//! use symalg_compute::symbolic::expr::{parse, Expr};
//! use symalg_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("(x + (y * 2))");
//! let ast_expr = parser.try_parse_full::<AstExpr>().unwrap();
//!
//! let expr = Expr::try_from(ast_expr).unwrap();
//! assert_eq!(expr, parse("(x + (y * 2))").unwrap());
//! assert_eq!(expr, Expr::var("x") + Expr::var("y") * 2);
//! ```
//!
//! # Differentiation
//!
//! [`derivative()`] applies the standard differentiation rules to produce a new tree. The result is
//! not simplified.
//!
//! # Simplification
//!
//! [`simplify()`] folds constant operations and removes identities in a single bottom-up pass. The
//! result evaluates to the same value as the input wherever both can be evaluated.
//!
//! ```
//! use symalg_compute::symbolic::{derivative, expr::parse, simplify};
//!
//! let expr = parse("(2 * x)").unwrap();
//! let derived = derivative(&expr, "x").unwrap();
//! assert_eq!(derived.to_string(), "((0 * x) + (2 * 1))");
//! assert_eq!(simplify(&derived).to_string(), "2");
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod error;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
