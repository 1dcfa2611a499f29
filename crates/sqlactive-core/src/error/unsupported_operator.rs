use super::Error;

/// Error when a predicate uses an operator with no SQL translation.
#[derive(Debug)]
pub(super) struct UnsupportedOperatorError {
    op: Box<str>,
}

impl std::error::Error for UnsupportedOperatorError {}

impl core::fmt::Display for UnsupportedOperatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operator `{}` in filter expression", self.op)
    }
}

impl Error {
    /// Creates an unsupported operator error.
    pub fn unsupported_operator(op: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperator(
            UnsupportedOperatorError {
                op: op.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported operator error.
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperator(_))
    }
}
