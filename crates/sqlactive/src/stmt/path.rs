use super::{Expr, IntoExpr};

use sqlactive_core::stmt;

use std::{fmt, marker::PhantomData};

/// A typed reference to one field of a model.
///
/// Models usually expose their fields as associated constants:
///
/// ```
/// use sqlactive::Path;
///
/// struct User;
///
/// impl User {
///     const AGE: Path<i32> = Path::new("age");
///     const NAME: Path<String> = Path::new("name");
/// }
///
/// let adults = User::AGE.gt(18).and(User::NAME.ne(None::<String>));
/// ```
pub struct Path<T: ?Sized> {
    field: &'static str,
    _p: PhantomData<T>,
}

impl<T: ?Sized> Path<T> {
    pub const fn new(field: &'static str) -> Path<T> {
        Path {
            field,
            _p: PhantomData,
        }
    }

    /// Name of the field, as declared in the model schema.
    pub fn name(&self) -> &'static str {
        self.field
    }

    fn untyped(&self) -> stmt::Expr {
        stmt::Expr::field(self.field)
    }

    pub fn eq(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::eq(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn ne(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ne(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn gt(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::gt(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn ge(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ge(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn lt(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::lt(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn le(&self, rhs: impl IntoExpr<T>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::le(self.untyped(), rhs.into_expr().untyped))
    }

    pub fn is_null(&self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::eq(self.untyped(), stmt::Expr::null()))
    }

    pub fn is_not_null(&self) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ne(self.untyped(), stmt::Expr::null()))
    }
}

impl Path<String> {
    /// Matches the column against a SQL `LIKE` pattern.
    pub fn like(&self, pattern: impl IntoExpr<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::like(self.untyped(), pattern.into_expr().untyped))
    }

    pub fn contains(&self, value: impl IntoExpr<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::contains(
            self.untyped(),
            value.into_expr().untyped,
        ))
    }

    pub fn starts_with(&self, value: impl IntoExpr<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::starts_with(
            self.untyped(),
            value.into_expr().untyped,
        ))
    }

    pub fn ends_with(&self, value: impl IntoExpr<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::ends_with(
            self.untyped(),
            value.into_expr().untyped,
        ))
    }

    pub fn equals(&self, value: impl IntoExpr<String>) -> Expr<bool> {
        Expr::from_untyped(stmt::Expr::equals(self.untyped(), value.into_expr().untyped))
    }
}

impl<T: ?Sized> Clone for Path<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Path<T> {}

impl<T: ?Sized> fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Path").field(&self.field).finish()
    }
}
