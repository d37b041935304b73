//! Simplification of expressions.
//!
//! [`simplify`] rewrites an expression bottom-up in a single pass: the operands of every operation
//! are simplified first, then the rules in [`rules`] for that operation are tried in order on the
//! simplified operands. The rules fold constant operations into numbers and eliminate identities
//! such as `(x + 0)` or `(x * 1)`.
//!
//! Simplification never fails. Operations that cannot be folded exactly, such as `(1 / 3)`,
//! `(2 ** 0.5)`, or `(1 / 0)`, are kept as they are, and any error they would raise is left for
//! evaluation to report.
//!
//! ```
//! use symalg_compute::symbolic::{expr::parse, simplify};
//!
//! let expr = parse("(((x * 1) + 0) * (2 + 3))").unwrap();
//! assert_eq!(simplify(&expr).to_string(), "(x * 5)");
//! ```

pub mod rules;
pub mod step;

use log::trace;
use super::{expr::Expr, step_collector::StepCollector};
use step::Step;

/// Simplifies the operands of an expression, then the expression itself.
fn inner_simplify(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    let Expr::Binary { op, left, right } = expr else {
        return expr.clone();
    };

    let left = inner_simplify(left, step_collector);
    let right = inner_simplify(right, step_collector);
    match rules::all(*op, &left, &right, step_collector) {
        Some(simplified) => {
            trace!("simplified ({} {} {}) to {}", left, op, right, simplified);
            simplified
        },
        None => Expr::Binary {
            op: *op,
            left: Box::new(left),
            right: Box::new(right),
        },
    }
}

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify(expr, &mut ())
}

/// Simplifies the given expression, returning the simplified expression and the steps taken to
/// simplify it, in the order they were applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify(expr, &mut steps);
    (simplified, steps)
}

impl Expr {
    /// Returns the simplified form of this expression. See [`simplify`].
    pub fn simplify(&self) -> Expr {
        simplify(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::numerical::{error::kind::DivisionByZero, eval::Eval, value::Number};
    use crate::symbolic::expr::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(source: &str) -> String {
        simplify(&parse(source).unwrap()).render()
    }

    #[test]
    fn leaves_are_unchanged() {
        assert_eq!(simplified("x"), "x");
        assert_eq!(simplified("-2.5"), "-2.5");
    }

    #[test]
    fn identity_elimination() {
        assert_eq!((Expr::var("x") + 0).simplify().render(), "x");
        assert_eq!((Expr::var("x") * 1).simplify().render(), "x");
        assert_eq!((Expr::var("x") * 0).simplify().render(), "0");
        assert_eq!(simplified("(0 + y)"), "y");
        assert_eq!(simplified("(y - 0)"), "y");
        assert_eq!(simplified("(0 - y)"), "(0 - y)");
        assert_eq!(simplified("(1 * y)"), "y");
        assert_eq!(simplified("(0 * y)"), "0");
        assert_eq!(simplified("(y / 1)"), "y");
        assert_eq!(simplified("(1 / y)"), "(1 / y)");
    }

    #[test]
    fn powers() {
        assert_eq!(simplified("(y ** 0)"), "1");
        assert_eq!(simplified("(0 ** 0)"), "1");
        assert_eq!(simplified("(y ** 1)"), "y");
        assert_eq!(simplified("(1 ** y)"), "(1 ** y)");
        assert_eq!(simplified("(2 ** 10)"), "1024");
        assert_eq!(simplified("(2 ** -2)"), "0.25");
        assert_eq!(simplified("(6.25 ** 0.5)"), "2.5");
    }

    #[test]
    fn folding() {
        assert_eq!(simplified("(2 + 3)"), "5");
        assert_eq!(simplified("(0.1 + 0.2)"), "0.3");
        assert_eq!(simplified("(2 - 3.5)"), "-1.5");
        assert_eq!(simplified("(1.5 * 4)"), "6");
        assert_eq!(simplified("(1 / 8)"), "0.125");
        assert_eq!(simplified("((x + (2 * 3)) - (4 / 2))"), "((x + 6) - 2)");
    }

    #[test]
    fn inexact_results_are_kept() {
        assert_eq!(simplified("(1 / 3)"), "(1 / 3)");
        assert_eq!(simplified("(2 ** 0.5)"), "(2 ** 0.5)");
        assert_eq!(simplified("(-8 ** 0.5)"), "(-8 ** 0.5)");
        assert_eq!(simplified("(0 ** -1)"), "(0 ** -1)");
    }

    #[test]
    fn division_by_zero_is_deferred() {
        let expr = parse("(1 / x)").unwrap();
        let result = simplify(&expr);
        assert_eq!(result, expr);

        assert_eq!(simplified("(1 / 0)"), "(1 / 0)");
        let err = parse("(1 / 0)").unwrap().simplify().eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn derivative_of_product() {
        let expr = parse("((0 * x) + (2 * 1))").unwrap();
        assert_eq!(simplify(&expr).render(), "2");
    }

    #[test]
    fn recorded_steps() {
        let expr = parse("(((x * 1) + 0) * (2 + 3))").unwrap();
        let (result, steps) = simplify_with_steps(&expr);
        assert_eq!(result.render(), "(x * 5)");
        assert_eq!(steps, vec![Step::MultiplyOne, Step::AddZero, Step::FoldConstants]);

        let (_, steps) = simplify_with_steps(&parse("((y ** 0) - (z / 1))").unwrap());
        assert_eq!(steps, vec![Step::PowerZero, Step::DivideOne]);

        let (_, steps) = simplify_with_steps(&parse("((y ** 1) - 0)").unwrap());
        assert_eq!(steps, vec![Step::PowerOne, Step::SubtractZero]);

        let (_, steps) = simplify_with_steps(&parse("(y * 0)").unwrap());
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }

    #[test]
    fn idempotent() {
        for source in ["(((x * 1) + 0) * (2 + 3))", "((1 / 3) * (x ** (1 + 0)))", "((y - 0) / (1 / 0))"] {
            let once = simplify(&parse(source).unwrap());
            assert_eq!(simplify(&once), once);
        }
    }

    #[test]
    fn preserves_value() {
        let expr = parse("(((x * 1) + (0 * y)) ** (3 - 1))").unwrap();
        let ctxt = [("x", 3), ("y", 4)].into_iter().collect();
        assert_eq!(simplify(&expr).eval(&ctxt).unwrap(), expr.eval(&ctxt).unwrap());
        assert_eq!(expr.eval(&ctxt).unwrap(), Number::from(9));
    }
}
