use super::Error;
use crate::stmt::Value;

/// Error when an update or delete is issued without a usable primary key.
#[derive(Debug)]
pub(super) struct MissingPrimaryKeyError {
    table: Box<str>,
    column: Box<str>,
    value: Value,
}

impl std::error::Error for MissingPrimaryKeyError {}

impl core::fmt::Display for MissingPrimaryKeyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing primary key `{}` for table `{}` (value: {:?})",
            self.column, self.table, self.value
        )
    }
}

impl Error {
    /// Creates a missing primary key error.
    pub fn missing_primary_key(
        table: impl Into<String>,
        column: impl Into<String>,
        value: &Value,
    ) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKeyError {
            table: table.into().into(),
            column: column.into().into(),
            value: value.clone(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
