use super::*;

/// A filter expression over the fields of one model.
///
/// Trees are built by a front-end (see the typed `Path`/`Expr` API in the
/// `sqlactive` crate) and consumed by the predicate compiler. The compiler
/// never mutates a tree, so the same tree can be compiled any number of times.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Comparison, logical, or bitwise operation
    BinaryOp(ExprBinaryOp),

    /// A value captured from outside the predicate
    Captured(ExprCaptured),

    /// Type coercion inserted by the front-end
    Convert(ExprConvert),

    /// References a field of the model being filtered
    Field(ExprField),

    /// Method call such as `like` or `contains`
    Method(ExprMethod),

    /// Literal value
    Value(Value),
}

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}
