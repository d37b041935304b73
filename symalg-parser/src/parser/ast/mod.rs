//! Abstract syntax tree produced by the [`Parser`](super::Parser). Every node keeps the region of
//! the source code it was parsed from, so that later stages can point errors at it.

pub mod binary;
pub mod expr;
pub mod literal;

pub use binary::Binary;
pub use expr::Expr;
pub use literal::{Literal, LitNum, LitSym};
