//! Simplification rules for powers.

use crate::numerical::value::Number;
use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};
use super::do_fold;

/// `a^0 = 1`, including `0^0`
pub fn power_zero(_: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::PowerZero);
    Some(Expr::Number(Number::one()))
}

/// `a^1 = a`
pub fn power_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_one() {
        return None;
    }

    step_collector.push(Step::PowerOne);
    Some(lhs.clone())
}

/// Applies all power rules.
///
/// Two numbers are only folded if the power is exact and can be written as a number literal. An
/// invalid power, such as `(0 ** -1)`, is left for evaluation to report.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(lhs, rhs, step_collector)
        .or_else(|| power_one(lhs, rhs, step_collector))
        .or_else(|| do_fold(lhs, rhs, step_collector, |a, b| a.pow(b).ok().filter(Number::is_terminating)))
}
