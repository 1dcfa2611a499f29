use super::Error;

/// Error when a domain type has no storage mapping.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    ty: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported type: {} has no storage mapping", self.ty)
    }
}

impl Error {
    /// Creates an unsupported type error.
    pub fn unsupported_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
