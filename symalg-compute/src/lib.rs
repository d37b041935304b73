//! Exact evaluation, differentiation, and simplification of symbolic algebra expressions.
//!
//! The [`symbolic`] module contains the expression tree, [`Expr`], along with differentiation,
//! simplification, and rendering. The [`numerical`] module evaluates expressions to exact
//! [`Number`]s.
//!
//! ```
//! use symalg_compute::{Ctxt, Eval, Number, parse};
//!
//! let expr = parse("((x ** 2) + (0.1 * x))").unwrap();
//! let ctxt = [("x", 3)].into_iter().collect::<Ctxt>();
//! assert_eq!(expr.eval(&ctxt).unwrap(), Number::from_decimal("9.3").unwrap());
//!
//! let derived = expr.differentiate("x").unwrap().simplify();
//! assert_eq!(derived.pretty().to_string(), "2 * x + 0.1");
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for
//!   expressions, numbers, and contexts.

pub mod numerical;
pub mod primitive;
pub mod symbolic;

pub use numerical::{ctxt::Ctxt, eval::Eval, value::Number};
pub use symbolic::{derivative, expr::{parse, Expr, Latex}, simplify, simplify_with_steps};
