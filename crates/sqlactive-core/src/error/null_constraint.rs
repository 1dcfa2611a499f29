use super::Error;

/// Error when a not-null or primary key column has no value.
///
/// Raised while generating the statement, so nothing reaches the store.
#[derive(Debug)]
pub(super) struct NullConstraintError {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for NullConstraintError {}

impl core::fmt::Display for NullConstraintError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "null is not allowed for column `{}` in table `{}`",
            self.column, self.table
        )
    }
}

impl Error {
    /// Creates a null constraint error.
    pub fn null_constraint(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NullConstraint(NullConstraintError {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a null constraint error.
    pub fn is_null_constraint(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NullConstraint(_))
    }
}
