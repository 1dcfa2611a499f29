use super::Expr;

/// A member read through a variable captured from outside the predicate.
///
/// The inner expression resolves to the member's value at the time the
/// predicate is compiled. It may itself be captured, convert, or a literal; it
/// must not reference the model's own fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCaptured {
    /// Name of the captured member, used in error messages.
    pub name: String,

    /// Expression yielding the member's value.
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn captured(name: impl Into<String>, expr: impl Into<Expr>) -> Self {
        ExprCaptured {
            name: name.into(),
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprCaptured> for Expr {
    fn from(value: ExprCaptured) -> Self {
        Self::Captured(value)
    }
}
