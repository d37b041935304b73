//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the already simplified operands of a binary
//! operation, and returns `Some(expr)` with the simplified operation if the rule applies, or
//! `None` if the rule does not apply.

pub mod add;
pub mod multiply;
pub mod power;

use crate::numerical::value::Number;
use crate::symbolic::{expr::{BinOpKind, Expr}, step_collector::StepCollector};
use super::step::Step;

/// If both operands are numbers, calls the given folding function with them.
///
/// Returns `Some(expr)` with the folded number if the folding function produced one.
pub(crate) fn do_fold(
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
    f: impl FnOnce(&Number, &Number) -> Option<Number>,
) -> Option<Expr> {
    let folded = f(lhs.as_number()?, rhs.as_number()?)?;
    step_collector.push(Step::FoldConstants);
    Some(Expr::Number(folded))
}

/// Applies all rules for the given operator.
pub fn all(
    op: BinOpKind,
    lhs: &Expr,
    rhs: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    match op {
        BinOpKind::Add => add::all(lhs, rhs, step_collector),
        BinOpKind::Sub => add::all_sub(lhs, rhs, step_collector),
        BinOpKind::Mul => multiply::all(lhs, rhs, step_collector),
        BinOpKind::Div => multiply::all_div(lhs, rhs, step_collector),
        BinOpKind::Pow => power::all(lhs, rhs, step_collector),
    }
}
