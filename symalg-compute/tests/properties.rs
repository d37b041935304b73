//! Property-based tests for the laws every expression must satisfy.
//!
//! Expressions are generated with a small depth, small integer and quarter-step leaves, and the
//! variables `x`, `y`, and `z`, so that evaluation stays fast.

use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
use symalg_compute::{
    parse,
    simplify,
    symbolic::expr::BinOpKind,
    Ctxt,
    Eval,
    Expr,
    Number,
};

const VARIABLES: [&str; 3] = ["x", "y", "z"];

/// An arbitrary expression tree.
#[derive(Debug, Clone)]
struct ArbExpr(Expr);

fn gen_leaf(g: &mut Gen) -> Expr {
    match u8::arbitrary(g) % 4 {
        0 | 1 => Expr::from(i32::arbitrary(g) % 6),
        2 => Expr::from(f64::from(i32::arbitrary(g) % 8) / 4.0),
        _ => Expr::var(*g.choose(&VARIABLES).unwrap()),
    }
}

fn gen_expr(g: &mut Gen, depth: usize) -> Expr {
    if depth == 0 || u8::arbitrary(g) % 4 == 0 {
        return gen_leaf(g);
    }

    let op = *g.choose(&BinOpKind::ALL).unwrap();
    Expr::binary(op, gen_expr(g, depth - 1), gen_expr(g, depth - 1))
}

impl Arbitrary for ArbExpr {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbExpr(gen_expr(g, 3))
    }
}

/// Binds every variable to a small integer.
#[derive(Debug, Clone)]
struct Bindings(Ctxt);

impl Arbitrary for Bindings {
    fn arbitrary(g: &mut Gen) -> Self {
        Bindings(VARIABLES.iter().map(|&name| (name, i32::arbitrary(g) % 10)).collect())
    }
}

#[test]
fn render_then_parse_round_trips() {
    fn prop(expr: ArbExpr) -> bool {
        parse(&expr.0.render()).map_or(false, |parsed| parsed == expr.0)
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(ArbExpr) -> bool);
}

#[test]
fn simplify_preserves_value() {
    fn prop(expr: ArbExpr, bindings: Bindings) -> TestResult {
        let simplified = simplify(&expr.0);
        match (expr.0.eval(&bindings.0), simplified.eval(&bindings.0)) {
            (Ok(original), Ok(simplified)) => TestResult::from_bool(original == simplified),
            _ => TestResult::discard(),
        }
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(ArbExpr, Bindings) -> TestResult);
}

#[test]
fn simplify_is_idempotent() {
    fn prop(expr: ArbExpr) -> bool {
        let once = simplify(&expr.0);
        simplify(&once) == once
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(ArbExpr) -> bool);
}

#[test]
fn simplify_never_grows() {
    fn prop(expr: ArbExpr) -> bool {
        simplify(&expr.0).post_order_iter().count() <= expr.0.post_order_iter().count()
    }
    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(ArbExpr) -> bool);
}

#[test]
fn derivative_of_square() {
    fn prop(v: i32) -> bool {
        let v = v % 10_000;
        let square = Expr::var("x") * "x";
        let derived = simplify(&square.differentiate("x").unwrap());
        let ctxt = [("x", v)].into_iter().collect::<Ctxt>();
        derived.eval(&ctxt).map_or(false, |value| value == Number::from(2 * v))
    }
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(i32) -> bool);
}

#[test]
fn parser_never_panics() {
    fn prop(input: String) -> TestResult {
        let _ = parse(&input);
        TestResult::passed()
    }
    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(String) -> TestResult);
}
