//! Numerical evaluation of expressions.
//!
//! An [`Expr`](crate::symbolic::expr::Expr) is evaluated to a [`value::Number`] with the
//! [`eval::Eval`] trait, given a [`ctxt::Ctxt`] that binds its variables. Evaluation stays exact
//! for as long as possible; see [`value::Number`] for details.

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod value;
