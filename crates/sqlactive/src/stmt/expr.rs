use super::{IntoExpr, Primitive};

use sqlactive_core::stmt::{self, BinaryOp, Value};

use std::{fmt, marker::PhantomData};

/// A typed filter expression.
///
/// `T` is the Rust type the expression evaluates to. Only `Expr<bool>` can be
/// handed to [`Db::select_where`](crate::Db::select_where).
pub struct Expr<T: ?Sized> {
    pub(crate) untyped: stmt::Expr,
    _p: PhantomData<T>,
}

impl<T: ?Sized> Expr<T> {
    pub fn from_untyped(untyped: impl Into<stmt::Expr>) -> Expr<T> {
        Expr {
            untyped: untyped.into(),
            _p: PhantomData,
        }
    }

    pub fn from_value(value: Value) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::Value(value))
    }

    /// A value the caller captured from its own scope.
    ///
    /// The name only shows up in error messages.
    pub fn captured(name: &str, value: impl IntoExpr<T>) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::captured(name, value.into_expr().untyped))
    }

    pub fn into_untyped(self) -> stmt::Expr {
        self.untyped
    }

    /// Reinterprets the expression as another type without converting it.
    pub fn cast<U: ?Sized>(self) -> Expr<U> {
        Expr::from_untyped(self.untyped)
    }

    /// Converts the expression's value to `U` before it is compared.
    pub fn convert<U: Primitive>(self) -> Expr<U> {
        Expr::from_untyped(stmt::Expr::convert(self.untyped, U::ty()))
    }

    pub fn bit_and(self, rhs: impl IntoExpr<T>) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::binary_op(
            self.untyped,
            BinaryOp::BitAnd,
            rhs.into_expr().untyped,
        ))
    }

    pub fn bit_or(self, rhs: impl IntoExpr<T>) -> Expr<T> {
        Expr::from_untyped(stmt::Expr::binary_op(
            self.untyped,
            BinaryOp::BitOr,
            rhs.into_expr().untyped,
        ))
    }

    /// Calls a store function with this expression as the first argument.
    pub fn call<U: ?Sized>(self, name: &str, args: Vec<stmt::Expr>) -> Expr<U> {
        Expr::from_untyped(stmt::Expr::method(name, Some(self.untyped), args))
    }

    pub fn eq(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::eq(self.untyped, rhs.into_expr().untyped))
    }

    pub fn ne(self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ne(self.untyped, rhs.into_expr().untyped))
    }
}

impl Expr<bool> {
    pub fn and(self, rhs: impl IntoExpr<bool>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::and(self.untyped, rhs.into_expr().untyped))
    }

    pub fn or(self, rhs: impl IntoExpr<bool>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::or(self.untyped, rhs.into_expr().untyped))
    }
}

impl<T: ?Sized> Clone for Expr<T> {
    fn clone(&self) -> Self {
        Expr::from_untyped(self.untyped.clone())
    }
}

impl<T: ?Sized> From<Expr<T>> for stmt::Expr {
    fn from(value: Expr<T>) -> Self {
        value.untyped
    }
}

impl<T: ?Sized> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}
