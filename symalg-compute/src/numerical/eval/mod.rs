mod binary;

use crate::symbolic::expr::Expr;
use super::{ctxt::Ctxt, error::{kind::UnboundVariable, Error}, value::Number};

pub use binary::eval_operator;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context to look up the values
    /// of variables.
    fn eval(&self, ctxt: &Ctxt) -> Result<Number, Error>;

    /// Evaluate the expression to produce a number, using an empty context.
    fn eval_default(&self) -> Result<Number, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    /// Evaluates the expression bottom-up, evaluating the left operand of every operation before
    /// its right operand. The first error encountered is returned.
    fn eval(&self, ctxt: &Ctxt) -> Result<Number, Error> {
        match self {
            Expr::Number(n) => Ok(n.clone()),
            Expr::Variable(name) => ctxt.get_var(name).cloned().ok_or_else(|| {
                Error::unspanned(UnboundVariable {
                    name: name.clone(),
                    suggestions: ctxt.get_similar_vars(name)
                        .into_iter()
                        .map(str::to_owned)
                        .collect(),
                })
            }),
            Expr::Binary { op, left, right } => {
                let left = left.eval(ctxt)?;
                let right = right.eval(ctxt)?;
                eval_operator(*op, &left, &right)
            },
        }
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use crate::numerical::error::kind::{DivisionByZero, InvalidExponent};
    use crate::symbolic::expr::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval_with(source: &str, vars: &[(&str, i32)]) -> Result<Number, Error> {
        let ctxt = vars.iter().copied().collect::<Ctxt>();
        parse(source).unwrap().eval(&ctxt)
    }

    #[test]
    fn constants() {
        assert_eq!(parse("7").unwrap().eval_default().unwrap(), Number::from(7));
        assert_eq!(parse("((1 + 2) * 4)").unwrap().eval_default().unwrap(), Number::from(12));
    }

    #[test]
    fn exact_decimals() {
        let sum = parse("(0.1 + 0.2)").unwrap().eval_default().unwrap();
        assert_eq!(sum, Number::from_decimal("0.3").unwrap());
        assert_eq!(sum.to_string(), "0.3");
    }

    #[test]
    fn variables() {
        let value = eval_with("((2 * x) + y)", &[("x", 3), ("y", -1)]).unwrap();
        assert_eq!(value, Number::from(5));

        let value = eval_with("(x ** 2)", &[("x", -4)]).unwrap();
        assert_eq!(value, Number::from(16));
    }

    #[test]
    fn fractional_power() {
        let value = parse("(4 ** 0.5)").unwrap().eval_default().unwrap();
        assert_eq!(value, Number::from(2));

        let value = parse("(2 ** 0.5)").unwrap().eval_default().unwrap();
        assert!((value.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn extreme_exponents() {
        let value = parse("(2 ** 0.0000000001)").unwrap().eval_default().unwrap();
        assert!((value.to_f64() - 1.0000000000693147).abs() < 1e-14);

        assert_eq!(parse("(1 ** 5000000000)").unwrap().eval_default().unwrap(), Number::from(1));
        assert_eq!(parse("(-1 ** 4000000000)").unwrap().eval_default().unwrap(), Number::from(1));
        assert_eq!(parse("(0 ** 3000000000)").unwrap().eval_default().unwrap(), Number::from(0));
    }

    #[test]
    fn unbound_variable() {
        let err = eval_with("(x + y)", &[("x", 1)]).unwrap_err();
        let kind = err.downcast_ref::<UnboundVariable>().unwrap();
        assert_eq!(kind.name, "y");
        assert!(err.spans.is_empty());
    }

    #[test]
    fn unbound_variable_suggestions() {
        let err = eval_with("(a + x2)", &[("a", 1), ("x1", 2)]).unwrap_err();
        let kind = err.downcast_ref::<UnboundVariable>().unwrap();
        assert_eq!(kind.suggestions, vec!["x1".to_string()]);
    }

    #[test]
    fn division_by_zero() {
        let err = eval_with("(1 / x)", &[("x", 0)]).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        let err = parse("(1 / (x - x))").unwrap().eval(&[("x", 5)].into_iter().collect()).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn invalid_exponents() {
        let err = parse("(0 ** -1)").unwrap().eval_default().unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidExponent>(), Some(&InvalidExponent::ZERO_TO_NEGATIVE));

        let err = parse("(-8 ** 0.5)").unwrap().eval_default().unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidExponent>(), Some(&InvalidExponent::NOT_REAL));
    }

    #[test]
    fn left_operand_fails_first() {
        let err = parse("((1 / 0) + z)").unwrap().eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }
}
