//! Simplification rules for expressions involving multiplication and division.

use crate::numerical::value::Number;
use crate::symbolic::{expr::Expr, simplify::step::Step, step_collector::StepCollector};
use super::do_fold;

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !lhs.is_zero() && !rhs.is_zero() {
        return None;
    }

    step_collector.push(Step::MultiplyZero);
    Some(Expr::Number(Number::zero()))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let other = if lhs.is_one() {
        rhs
    } else if rhs.is_one() {
        lhs
    } else {
        return None;
    };

    step_collector.push(Step::MultiplyOne);
    Some(other.clone())
}

/// `a/1 = a`
pub fn divide_one(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    if !rhs.is_one() {
        return None;
    }

    step_collector.push(Step::DivideOne);
    Some(lhs.clone())
}

/// Applies all multiplication rules.
pub fn all(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    do_fold(lhs, rhs, step_collector, |a, b| Some(a * b))
        .or_else(|| multiply_zero(lhs, rhs, step_collector))
        .or_else(|| multiply_one(lhs, rhs, step_collector))
}

/// Applies all division rules.
///
/// Two numbers are only folded if the quotient is exact and can be written as a number literal,
/// so `(1 / 4)` becomes `0.25`, but `(1 / 3)` is kept. A division by zero is never folded; it is
/// left for evaluation to report.
pub fn all_div(lhs: &Expr, rhs: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    do_fold(lhs, rhs, step_collector, |a, b| a.checked_div(b).filter(Number::is_terminating))
        .or_else(|| divide_one(lhs, rhs, step_collector))
}
