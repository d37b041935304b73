use ariadne::{Report, ReportKind, Source};
use std::{io, ops::Range};
use symalg_error::Error as ExprError;

/// Utility enum to package errors that can occur while running a command.
#[derive(Debug)]
pub enum Error {
    /// An error that occurred while parsing, evaluating, or differentiating an expression.
    Expr(ExprError),

    /// The command is missing its arguments.
    Usage(&'static str),
}

impl Error {
    /// Report this error to stderr, highlighting the given input.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        match self {
            Self::Expr(err) => err.report_to_stderr(src_id, input),
            Self::Usage(usage) => Report::<(&str, Range<usize>)>::build(ReportKind::Error, src_id, 0)
                .with_message("missing arguments")
                .with_help(format!("usage: {}", usage))
                .finish()
                .eprint((src_id, Source::from(input))),
        }
    }
}

impl From<ExprError> for Error {
    fn from(err: ExprError) -> Self {
        Self::Expr(err)
    }
}
