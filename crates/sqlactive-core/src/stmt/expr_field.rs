use super::Expr;

/// References a field of the model the predicate is evaluated against.
///
/// The name is matched against the declared field name first and the storage
/// column name second.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprField {
    pub name: String,
}

impl Expr {
    pub fn field(name: impl Into<String>) -> Self {
        ExprField { name: name.into() }.into()
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}
