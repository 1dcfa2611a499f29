use super::Expr;

/// A method call in a filter expression.
///
/// `Like`, `Contains`, `StartsWith`, `EndsWith`, and `Equals` have a defined
/// translation. Any other name is rendered as a lowercase SQL function call.
/// That fallback is best effort and its output is not stable.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMethod {
    /// Method name, matched case-sensitively against the recognized names.
    pub name: String,

    /// Receiver, if the method is called on a value.
    pub target: Option<Box<Expr>>,

    pub args: Vec<Expr>,
}

impl ExprMethod {
    pub const LIKE: &'static str = "Like";
    pub const CONTAINS: &'static str = "Contains";
    pub const STARTS_WITH: &'static str = "StartsWith";
    pub const ENDS_WITH: &'static str = "EndsWith";
    pub const EQUALS: &'static str = "Equals";
}

impl Expr {
    pub fn method(name: impl Into<String>, target: Option<Expr>, args: Vec<Expr>) -> Self {
        ExprMethod {
            name: name.into(),
            target: target.map(Box::new),
            args,
        }
        .into()
    }

    /// `(target LIKE pattern)`
    pub fn like(target: impl Into<Expr>, pattern: impl Into<Expr>) -> Self {
        Expr::method(ExprMethod::LIKE, None, vec![target.into(), pattern.into()])
    }

    /// `(target LIKE '%value%')`
    pub fn contains(target: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        Expr::method(
            ExprMethod::CONTAINS,
            Some(target.into()),
            vec![value.into()],
        )
    }

    /// `(target LIKE 'value%')`
    pub fn starts_with(target: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        Expr::method(
            ExprMethod::STARTS_WITH,
            Some(target.into()),
            vec![value.into()],
        )
    }

    /// `(target LIKE '%value')`
    pub fn ends_with(target: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        Expr::method(
            ExprMethod::ENDS_WITH,
            Some(target.into()),
            vec![value.into()],
        )
    }

    /// `(target = (value))`
    pub fn equals(target: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        Expr::method(ExprMethod::EQUALS, Some(target.into()), vec![value.into()])
    }
}

impl From<ExprMethod> for Expr {
    fn from(value: ExprMethod) -> Self {
        Self::Method(value)
    }
}
