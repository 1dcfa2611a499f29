use super::*;
use crate::{Error, Result};

use chrono::{DateTime, Utc};

/// A domain value, as held by a model field or a predicate literal.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit float
    F32(f32),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// UTC timestamp
    DateTime(DateTime<Utc>),

    /// Unique identifier
    Uuid(uuid::Uuid),

    /// Binary blob
    Bytes(Vec<u8>),

    /// Discriminant of an enumerated type
    Enum(i64),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is null or the nil identifier.
    ///
    /// A nil identifier is the default of an unset `Uuid` field and is treated
    /// as missing by the not-null and primary key checks.
    pub fn is_null_or_nil(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Uuid(uuid) => uuid.is_nil(),
            _ => false,
        }
    }

    /// Returns `true` if the value cannot identify a row.
    ///
    /// On top of [`Value::is_null_or_nil`], zero and the empty string count as
    /// missing since they are the defaults of unset integer and string keys.
    pub fn is_missing_key(&self) -> bool {
        match self {
            Self::String(value) => value.is_empty(),
            Self::I8(0) | Self::I16(0) | Self::I32(0) | Self::I64(0) => true,
            Self::U8(0) | Self::U16(0) | Self::U32(0) | Self::U64(0) => true,
            _ => self.is_null_or_nil(),
        }
    }

    /// Returns `true` if the value is a bool, a number, or a string.
    ///
    /// These are the literals the simple predicate compilation inlines into
    /// SQL text. Everything else is bound as a parameter.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Bool(_)
                | Self::I8(_)
                | Self::I16(_)
                | Self::I32(_)
                | Self::I64(_)
                | Self::U8(_)
                | Self::U16(_)
                | Self::U32(_)
                | Self::U64(_)
                | Self::F32(_)
                | Self::F64(_)
                | Self::String(_)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn into_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "bool")),
        }
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn is_a(&self, ty: &Type) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(_) => ty.is_bool(),
            Self::I8(_) => matches!(ty, Type::I8),
            Self::I16(_) => matches!(ty, Type::I16),
            Self::I32(_) => matches!(ty, Type::I32),
            Self::I64(_) => matches!(ty, Type::I64),
            Self::U8(_) => matches!(ty, Type::U8),
            Self::U16(_) => matches!(ty, Type::U16),
            Self::U32(_) => matches!(ty, Type::U32),
            Self::U64(_) => matches!(ty, Type::U64),
            Self::F32(_) => matches!(ty, Type::F32),
            Self::F64(_) => matches!(ty, Type::F64),
            Self::String(_) => ty.is_string(),
            Self::DateTime(_) => matches!(ty, Type::DateTime),
            Self::Uuid(_) => ty.is_uuid(),
            Self::Bytes(_) => matches!(ty, Type::Bytes),
            Self::Enum(discriminant) => match ty {
                Type::Enum(ty) => ty.variant_by_discriminant(*discriminant).is_some(),
                _ => false,
            },
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(value: uuid::Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl TryFrom<Value> for uuid::Uuid {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(value) => Ok(value),
            _ => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.into_bool()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.into_string()
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}
