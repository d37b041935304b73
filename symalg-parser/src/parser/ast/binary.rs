use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        token::op::BinOp,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized binary expression, such as `(1 + 2)`. Binary expressions can include nested
/// expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from, including the
    /// parentheses.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Binary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.next_token()?;
        if open_paren.kind != TokenKind::OpenParen {
            return Err(Error::new(vec![open_paren.span], kind::UnexpectedToken {
                expected: &[TokenKind::OpenParen],
                found: open_paren.kind,
            }));
        }

        let lhs = input.try_parse::<Expr>()?;
        let op = input.try_parse::<BinOp>()?;
        let rhs = input.try_parse::<Expr>()?;

        // exactly one operator and two operands fit inside a pair of parentheses
        let close_paren = match input.next_token() {
            Ok(token) if token.kind == TokenKind::CloseParen => token,
            Ok(token) if token.kind.begins_operand() => {
                return Err(Error::new(vec![token.span], kind::ExtraOperand));
            },
            Ok(token) => {
                return Err(Error::new(vec![token.span], kind::UnexpectedToken {
                    expected: &[TokenKind::CloseParen],
                    found: token.kind,
                }));
            },
            Err(_) => {
                return Err(Error::new(vec![open_paren.span], kind::UnclosedParenthesis {
                    opening: true,
                }));
            },
        };

        Ok(Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op.kind, self.rhs)
    }
}
