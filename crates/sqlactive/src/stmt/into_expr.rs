use super::{Expr, Path};

use chrono::{DateTime, Utc};
use sqlactive_core::stmt::{self, Value};
use uuid::Uuid;

/// Values and expressions usable where an `Expr<T>` is expected.
pub trait IntoExpr<T: ?Sized> {
    fn into_expr(self) -> Expr<T>;
}

macro_rules! impl_into_expr_for_primitive {
    ( $( $t:ty ),* ) => {
        $(
            impl IntoExpr<$t> for $t {
                fn into_expr(self) -> Expr<$t> {
                    Expr::from_value(Value::from(self))
                }
            }
        )*
    };
}

impl_into_expr_for_primitive!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    Uuid,
    DateTime<Utc>,
    Vec<u8>
);

impl IntoExpr<String> for &str {
    fn into_expr(self) -> Expr<String> {
        Expr::from_value(Value::from(self))
    }
}

impl<T: ?Sized> IntoExpr<T> for Expr<T> {
    fn into_expr(self) -> Expr<T> {
        self
    }
}

impl<T: ?Sized> IntoExpr<T> for Path<T> {
    fn into_expr(self) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::field(self.name()))
    }
}

impl<T: IntoExpr<T> + Clone> IntoExpr<T> for &T {
    fn into_expr(self) -> Expr<T> {
        self.clone().into_expr()
    }
}

/// `None` compares as null, which a comparison rewrites to `is` / `is not`.
impl<T: IntoExpr<T>> IntoExpr<T> for Option<T> {
    fn into_expr(self) -> Expr<T> {
        match self {
            Some(value) => value.into_expr(),
            None => Expr::from_value(Value::Null),
        }
    }
}

impl<T: IntoExpr<T>> IntoExpr<Option<T>> for Option<T> {
    fn into_expr(self) -> Expr<Option<T>> {
        match self {
            Some(value) => value.into_expr().cast(),
            None => Expr::from_value(Value::Null),
        }
    }
}

impl<T: IntoExpr<T>> IntoExpr<Option<T>> for T {
    fn into_expr(self) -> Expr<Option<T>> {
        IntoExpr::<T>::into_expr(self).cast()
    }
}
