use super::Error;

/// Error when a predicate orders a value against null.
///
/// SQL only defines `IS` and `IS NOT` for null, so `<`, `>=` and friends have
/// no translation.
#[derive(Debug)]
pub(super) struct NullComparisonError {
    op: Box<str>,
}

impl std::error::Error for NullComparisonError {}

impl core::fmt::Display for NullComparisonError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot compare against null with `{}`; only `=` and `!=` are defined for null",
            self.op
        )
    }
}

impl Error {
    /// Creates a null comparison error for the operator `op`.
    pub fn null_comparison(op: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NullComparison(NullComparisonError {
            op: op.into().into(),
        }))
    }

    /// Returns `true` if this error is a null comparison error.
    pub fn is_null_comparison(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NullComparison(_))
    }
}
