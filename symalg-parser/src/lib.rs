//! Tokenizer and parser for the textual notation of symbolic algebra expressions.
//!
//! Every binary operation is written fully parenthesized as `(left OP right)`, where `OP` is one
//! of `+`, `-`, `*`, `/`, or `**` (`^` is accepted as an alias of `**`). A bare token is a number
//! literal (such as `2`, `0.5`, or `-3`) or a variable name (such as `x`).
//!
//! ```
//! use symalg_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("((2 * x) + 1)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "((2 * x) + 1)");
//! ```

pub mod parser;
pub mod tokenizer;
