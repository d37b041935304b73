//! Conversions into [`Expr`], and the arithmetic operators used to build expression trees.

use crate::numerical::value::Number;
use std::ops::{Add, Div, Mul, Sub};
use super::{BinOpKind, Expr};

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Expr::Number(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Expr::Number(n.into())
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Number(n.into())
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Number(n.into())
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::Variable(name.to_owned())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Variable(name)
    }
}

/// Implements a binary operator that builds a new [`Expr::Binary`] node, with an [`Expr`] on the
/// left and anything that converts into an [`Expr`] on the right, as well as the reverse for
/// primitive left-hand operands.
macro_rules! impl_build_op {
    ($trait:ident, $method:ident, $kind:expr, $($prim:ty),*) => {
        impl<T: Into<Expr>> $trait<T> for Expr {
            type Output = Expr;

            fn $method(self, rhs: T) -> Expr {
                Expr::binary($kind, self, rhs)
            }
        }

        $(
            impl $trait<Expr> for $prim {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    Expr::binary($kind, self, rhs)
                }
            }
        )*
    };
}

impl_build_op!(Add, add, BinOpKind::Add, i32, i64, f64, &str);
impl_build_op!(Sub, sub, BinOpKind::Sub, i32, i64, f64, &str);
impl_build_op!(Mul, mul, BinOpKind::Mul, i32, i64, f64, &str);
impl_build_op!(Div, div, BinOpKind::Div, i32, i64, f64, &str);
