use crate::numerical::{
    error::{kind::DivisionByZero, Error},
    value::Number,
};
use log::trace;
use symalg_parser::parser::token::op::BinOpKind;

/// Applies a binary operator to two evaluated operands.
pub fn eval_operator(op: BinOpKind, left: &Number, right: &Number) -> Result<Number, Error> {
    let result = match op {
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Mul => left * right,
        BinOpKind::Div => left.checked_div(right)
            .ok_or_else(|| Error::unspanned(DivisionByZero))?,
        BinOpKind::Pow => left.pow(right).map_err(Error::unspanned)?,
    };
    trace!("{} {} {} = {}", left, op, right, result);
    Ok(result)
}
