use super::Error;

/// Error when a filter expression is well-typed but cannot be turned into SQL.
///
/// This occurs when:
/// - A field is not a stored column of the model being queried
/// - A captured variable resolves to an expression that yields no value
/// - A recognized method is called with the wrong number of arguments
#[derive(Debug)]
pub(super) struct InvalidExpressionError {
    message: Box<str>,
}

impl std::error::Error for InvalidExpressionError {}

impl core::fmt::Display for InvalidExpressionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid expression: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid expression error.
    pub fn invalid_expression(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidExpression(InvalidExpressionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid expression error.
    pub fn is_invalid_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidExpression(_))
    }
}
