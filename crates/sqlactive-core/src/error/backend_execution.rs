use super::Error;

/// Error when the connection backend rejects a statement.
///
/// This wraps errors from the underlying database library:
/// - Opening the store failed (bad path, permissions)
/// - A statement failed to prepare or execute (syntax, constraint violation)
/// - A row could not be read back
///
/// The SQL text that was sent is kept so failures can be diagnosed without
/// re-generating the statement.
#[derive(Debug)]
pub(super) struct BackendExecutionError {
    sql: Option<Box<str>>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for BackendExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for BackendExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("backend execution failed: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        if let Some(sql) = &self.sql {
            write!(f, "; sql={sql}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a backend failure that is not tied to a single
    /// statement, such as opening the store.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::BackendExecution(BackendExecutionError {
            sql: None,
            inner: Box::new(err),
        }))
    }

    /// Creates an error from a backend failure while running `sql`.
    pub fn backend_execution(
        sql: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::BackendExecution(BackendExecutionError {
            sql: Some(sql.into().into()),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a backend execution failure.
    pub fn is_backend_execution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::BackendExecution(_))
    }

    /// Returns the SQL text that the backend rejected, if known.
    pub fn sql(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::BackendExecution(err) => err.sql.as_deref(),
            _ => None,
        }
    }
}
