use super::{Expr, Type};

/// Coerces the inner expression to `ty`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConvert {
    pub expr: Box<Expr>,
    pub ty: Type,
}

impl Expr {
    pub fn convert(expr: impl Into<Expr>, ty: impl Into<Type>) -> Self {
        ExprConvert {
            expr: Box::new(expr.into()),
            ty: ty.into(),
        }
        .into()
    }
}

impl From<ExprConvert> for Expr {
    fn from(value: ExprConvert) -> Self {
        Self::Convert(value)
    }
}
