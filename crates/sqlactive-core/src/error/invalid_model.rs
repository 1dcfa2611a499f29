use super::Error;

/// Error when a model declaration cannot be turned into a table mapping.
///
/// This occurs when:
/// - No table name can be resolved
/// - The model declares zero or several primary keys
/// - Two fields map to the same column name
/// - Auto-increment is declared on a column that is not an integer primary key
/// - A statement needs at least one column and the model has none left
///
/// These errors are raised while building the model descriptor, before any SQL
/// is generated.
#[derive(Debug)]
pub(super) struct InvalidModelError {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidModelError {}

impl core::fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model `{}`: {}", self.model, self.message)
    }
}

impl Error {
    /// Creates an invalid model error for the model (or table) named `model`.
    pub fn invalid_model(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModel(InvalidModelError {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid model error.
    pub fn is_invalid_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidModel(_))
    }
}
