//! Symbolic differentiation.
//!
//! The derivative is built by structural recursion, applying the sum, difference, product,
//! quotient, and power rules. No simplification is done here, so the result usually contains
//! terms such as `(0 * x)`; pass it through [`simplify`](super::simplify()) to clean it up.

use crate::numerical::value::Number;
use log::debug;
use super::{error::{kind::VariableExponent, Error}, expr::{BinOpKind, Expr}};

/// Returns the derivative of `f` with respect to the variable `with`.
///
/// ```
/// use symalg_compute::symbolic::{derivative, expr::parse};
///
/// let f = parse("(x ** 3)").unwrap();
/// assert_eq!(derivative(&f, "x").unwrap().to_string(), "((3 * (x ** 2)) * 1)");
/// ```
pub fn derivative(f: &Expr, with: &str) -> Result<Expr, Error> {
    debug!("differentiating {} with respect to {}", f, with);
    derive(f, with)
}

fn derive(f: &Expr, with: &str) -> Result<Expr, Error> {
    let (op, a, b) = match f {
        Expr::Number(_) => return Ok(Expr::from(0)),
        Expr::Variable(name) => return Ok(Expr::from(if name == with { 1 } else { 0 })),
        Expr::Binary { op, left, right } => (*op, &**left, &**right),
    };

    Ok(match op {
        BinOpKind::Add => derive(a, with)? + derive(b, with)?,
        BinOpKind::Sub => derive(a, with)? - derive(b, with)?,
        // (a * b)' = a' * b + a * b'
        BinOpKind::Mul => derive(a, with)? * b.clone() + a.clone() * derive(b, with)?,
        // (a / b)' = (a' * b - a * b') / (b * b)
        BinOpKind::Div => {
            (derive(a, with)? * b.clone() - a.clone() * derive(b, with)?) / (b.clone() * b.clone())
        },
        BinOpKind::Pow => power_rule(f, a, b, with)?,
    })
}

/// (a ** n)' = n * a ** (n - 1) * a', for `n` constant with respect to `with`
fn power_rule(power: &Expr, base: &Expr, exp: &Expr, with: &str) -> Result<Expr, Error> {
    let reduced = match exp {
        Expr::Number(n) => Expr::Number(n - &Number::one()),
        exp if !exp.contains_variable(with) => exp.clone() - 1,
        _ => return Err(Error::unspanned(VariableExponent {
            power: power.to_string(),
            with: with.to_owned(),
        })),
    };

    Ok(exp.clone() * base.clone().pow(reduced) * derive(base, with)?)
}

impl Expr {
    /// Returns the derivative of this expression with respect to the given variable. See
    /// [`derivative`].
    pub fn differentiate(&self, with: &str) -> Result<Expr, Error> {
        derivative(self, with)
    }
}

#[cfg(test)]
mod tests {
    use crate::numerical::{ctxt::Ctxt, eval::Eval};
    use crate::symbolic::{expr::parse, simplify};
    use pretty_assertions::assert_eq;
    use super::*;

    fn diff(source: &str) -> Expr {
        derivative(&parse(source).unwrap(), "x").unwrap()
    }

    #[test]
    fn leaves() {
        assert_eq!(diff("5"), Expr::from(0));
        assert_eq!(diff("x"), Expr::from(1));
        assert_eq!(diff("y"), Expr::from(0));
    }

    #[test]
    fn sum_and_difference() {
        assert_eq!(diff("(x + y)"), parse("(1 + 0)").unwrap());
        assert_eq!(diff("(3 - x)"), parse("(0 - 1)").unwrap());
    }

    #[test]
    fn product_rule() {
        assert_eq!(diff("(2 * x)"), parse("((0 * x) + (2 * 1))").unwrap());
        assert_eq!(simplify(&diff("(2 * x)")).render(), "2");
    }

    #[test]
    fn quotient_rule() {
        assert_eq!(diff("(1 / x)"), parse("(((0 * x) - (1 * 1)) / (x * x))").unwrap());
    }

    #[test]
    fn power_rule_number_exponent() {
        assert_eq!(diff("(x ** 3)"), parse("((3 * (x ** 2)) * 1)").unwrap());
        assert_eq!(diff("(x ** 0.5)"), parse("((0.5 * (x ** -0.5)) * 1)").unwrap());
    }

    #[test]
    fn power_rule_symbolic_exponent() {
        assert_eq!(diff("(x ** n)"), parse("((n * (x ** (n - 1))) * 1)").unwrap());
    }

    #[test]
    fn chain_rule() {
        assert_eq!(
            diff("((2 * x) ** 2)"),
            parse("((2 * ((2 * x) ** 1)) * ((0 * x) + (2 * 1)))").unwrap(),
        );
    }

    #[test]
    fn variable_exponent() {
        let f = parse("(2 ** x)").unwrap();
        let err = derivative(&f, "x").unwrap_err();
        assert_eq!(
            err.downcast_ref::<VariableExponent>(),
            Some(&VariableExponent { power: "(2 ** x)".to_string(), with: "x".to_string() }),
        );
        assert!(err.spans.is_empty());
        assert_eq!(err.to_string(), "cannot differentiate `(2 ** x)` with respect to `x`");

        // constant with respect to `y`
        assert_eq!(derivative(&f, "y").unwrap(), parse("((x * (2 ** (x - 1))) * 0)").unwrap());
    }

    #[test]
    fn square_evaluates_to_twice_the_input() {
        let f = Expr::var("x") * "x";
        let df = simplify(&f.differentiate("x").unwrap());
        for v in [-3, 0, 2, 7] {
            let ctxt = [("x", v)].into_iter().collect::<Ctxt>();
            assert_eq!(df.eval(&ctxt).unwrap(), Number::from(2 * v));
        }
    }
}
