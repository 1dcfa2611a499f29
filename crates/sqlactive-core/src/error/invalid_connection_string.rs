use super::Error;

/// Error when a connection string cannot be parsed.
///
/// This occurs when:
/// - The `path` key is missing or empty
/// - A key is not recognized
/// - A value does not parse for its key (`busy_timeout=soon`)
#[derive(Debug)]
pub(super) struct InvalidConnectionStringError {
    message: Box<str>,
}

impl std::error::Error for InvalidConnectionStringError {}

impl core::fmt::Display for InvalidConnectionStringError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid connection string: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid connection string error.
    pub fn invalid_connection_string(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionString(
            InvalidConnectionStringError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid connection string error.
    pub fn is_invalid_connection_string(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionString(_))
    }
}
