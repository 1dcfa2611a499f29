use super::TypeEnum;
use std::fmt;

/// The domain type of a model field.
///
/// Every field declares one of these. The Type Codec maps each to a SQL storage
/// type; `U64` is representable here but has no storage mapping, so a model
/// declaring it fails to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// String type
    String,

    /// UTC timestamp, stored with second precision
    DateTime,

    /// 128-bit unique identifier
    Uuid,

    /// Binary blob
    Bytes,

    /// An enumeration stored by discriminant
    Enum(TypeEnum),
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_uuid(&self) -> bool {
        matches!(self, Self::Uuid)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns `true` for every signed and unsigned integer type.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::DateTime => "DateTime<Utc>",
            Self::Uuid => "Uuid",
            Self::Bytes => "Vec<u8>",
            Self::Enum(ty) => ty.name.as_str(),
        };
        f.write_str(name)
    }
}
