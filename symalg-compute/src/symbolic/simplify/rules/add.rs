//! Simplification rules for expressions involving addition and subtraction.

use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};
use super::do_fold;

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let other = if lhs.is_zero() {
        rhs
    } else if rhs.is_zero() {
        lhs
    } else {
        return None;
    };

    step_collector.push(Step::AddZero);
    Some(other.clone())
}

/// `a-0 = a`
pub fn subtract_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::SubtractZero);
    Some(lhs.clone())
}

/// Applies all addition rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    do_fold(lhs, rhs, step_collector, |a, b| Some(a + b))
        .or_else(|| add_zero(lhs, rhs, step_collector))
}

/// Applies all subtraction rules.
pub fn all_sub(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    do_fold(lhs, rhs, step_collector, |a, b| Some(a - b))
        .or_else(|| subtract_zero(lhs, rhs, step_collector))
}
