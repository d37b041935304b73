//! Errors produced while parsing. Every error kind in [`kind`] is part of the family of
//! "malformed expression" errors: the input text does not match the grammar.

pub mod kind;

pub use symalg_error::Error;
