//! Conversion between domain values and their SQL storage form.
//!
//! Dates are stored as whole seconds since the Unix epoch, booleans as `1`/`0`,
//! enumerations as their discriminant, and identifiers as the canonical
//! 36-character hyphenated string.

use crate::{
    schema::SqlType,
    stmt::{Type, Value},
    Error, Result,
};

use chrono::{DateTime, Utc};

/// A value in the representation the store keeps on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Storage {
    /// Converts a value to storage without checking it against a field type.
    pub fn from_value(value: &Value) -> Result<Storage> {
        Ok(match value {
            Value::Null => Storage::Null,
            Value::Bool(v) => Storage::Integer(i64::from(*v)),
            Value::I8(v) => Storage::Integer((*v).into()),
            Value::I16(v) => Storage::Integer((*v).into()),
            Value::I32(v) => Storage::Integer((*v).into()),
            Value::I64(v) => Storage::Integer(*v),
            Value::U8(v) => Storage::Integer((*v).into()),
            Value::U16(v) => Storage::Integer((*v).into()),
            Value::U32(v) => Storage::Integer((*v).into()),
            Value::U64(_) => return Err(Error::unsupported_type(Type::U64.to_string())),
            Value::F32(v) => Storage::Real((*v).into()),
            Value::F64(v) => Storage::Real(*v),
            Value::String(v) => Storage::Text(v.clone()),
            Value::DateTime(v) => Storage::Integer(epoch_seconds(v)),
            Value::Uuid(v) => Storage::Text(v.hyphenated().to_string()),
            Value::Bytes(v) => Storage::Blob(v.clone()),
            Value::Enum(v) => Storage::Integer(*v),
        })
    }

    /// Reinterprets the stored value without a target type.
    pub fn into_value(self) -> Value {
        match self {
            Storage::Null => Value::Null,
            Storage::Integer(v) => Value::I64(v),
            Storage::Real(v) => Value::F64(v),
            Storage::Text(v) => Value::String(v),
            Storage::Blob(v) => Value::Bytes(v),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Storage::Null)
    }
}

/// Resolves the SQL column type for a domain type.
pub fn resolve_sql_type(ty: &Type) -> Result<SqlType> {
    Ok(match ty {
        Type::Bool | Type::I8 | Type::I16 | Type::I32 | Type::U8 | Type::U16 => SqlType::Integer,
        Type::I64 | Type::U32 => SqlType::BigInt,
        Type::F32 | Type::F64 => SqlType::Float,
        Type::String => SqlType::VarChar(None),
        Type::DateTime => SqlType::Integer,
        Type::Uuid => SqlType::VarChar(Some(36)),
        Type::Bytes => SqlType::Blob,
        Type::Enum(_) => SqlType::Integer,
        Type::U64 => return Err(Error::unsupported_type(ty.to_string())),
    })
}

/// Converts `value` to its storage form after checking it is a `ty`.
pub fn to_storage(value: &Value, ty: &Type) -> Result<Storage> {
    resolve_sql_type(ty)?;

    if !value.is_a(ty) {
        return Err(Error::type_conversion(value.clone(), ty.to_string()));
    }

    Storage::from_value(value)
}

/// Converts a stored value back to a value of type `ty`.
pub fn from_storage(raw: Storage, ty: &Type) -> Result<Value> {
    let original = raw.clone();

    let value = match (raw, ty) {
        (Storage::Null, _) => Some(Value::Null),
        (Storage::Integer(v), Type::Bool) => Some(Value::Bool(v != 0)),
        (Storage::Integer(v), Type::DateTime) => {
            DateTime::<Utc>::from_timestamp(v, 0).map(Value::DateTime)
        }
        (Storage::Integer(v), Type::Enum(ty)) => ty
            .variant_by_discriminant(v)
            .map(|variant| Value::Enum(variant.discriminant)),
        (Storage::Integer(v), Type::F32) => Some(Value::F32(v as f32)),
        (Storage::Integer(v), Type::F64) => Some(Value::F64(v as f64)),
        (Storage::Integer(v), Type::String) => Some(Value::String(v.to_string())),
        (Storage::Integer(v), ty) if ty.is_integer() => integer(Value::I64(v), ty),
        (Storage::Real(v), Type::F32) => Some(Value::F32(v as f32)),
        (Storage::Real(v), Type::F64) => Some(Value::F64(v)),
        (Storage::Real(v), Type::String) => Some(Value::String(v.to_string())),
        (Storage::Real(v), ty) if ty.is_integer() && v.fract() == 0.0 => {
            integer(Value::I64(v as i64), ty)
        }
        (Storage::Text(v), Type::String) => Some(Value::String(v)),
        (Storage::Text(v), Type::Uuid) => parse_uuid(&v).map(Value::Uuid),
        (Storage::Text(v), Type::F64) => v.parse().ok().map(Value::F64),
        (Storage::Text(v), Type::F32) => v.parse().ok().map(Value::F32),
        (Storage::Text(v), ty) if ty.is_integer() => integer(Value::String(v), ty),
        (Storage::Blob(v), Type::Bytes) => Some(Value::Bytes(v)),
        (Storage::Text(v), Type::Bytes) => Some(Value::Bytes(v.into_bytes())),
        _ => None,
    };

    value.ok_or_else(|| Error::type_conversion(original.into_value(), ty.to_string()))
}

/// Coerces `value` to `ty` by passing it through storage.
///
/// This is the cast applied by convert nodes in filter expressions, so an `i32`
/// literal compared against an `i64` field binds as an `i64`.
pub fn convert(value: Value, ty: &Type) -> Result<Value> {
    if value.is_a(ty) {
        return Ok(value);
    }

    let raw = Storage::from_value(&value)?;
    from_storage(raw, ty).map_err(|_| Error::type_conversion(value, ty.to_string()))
}

/// Seconds since the epoch, truncated toward zero.
fn epoch_seconds(value: &DateTime<Utc>) -> i64 {
    let seconds = value.timestamp();
    if seconds < 0 && value.timestamp_subsec_nanos() > 0 {
        seconds + 1
    } else {
        seconds
    }
}

fn integer(value: Value, ty: &Type) -> Option<Value> {
    Some(match ty {
        Type::I8 => Value::I8(i8::try_from(value).ok()?),
        Type::I16 => Value::I16(i16::try_from(value).ok()?),
        Type::I32 => Value::I32(i32::try_from(value).ok()?),
        Type::I64 => Value::I64(i64::try_from(value).ok()?),
        Type::U8 => Value::U8(u8::try_from(value).ok()?),
        Type::U16 => Value::U16(u16::try_from(value).ok()?),
        Type::U32 => Value::U32(u32::try_from(value).ok()?),
        _ => return None,
    })
}

fn parse_uuid(text: &str) -> Option<uuid::Uuid> {
    if text.len() != 36 {
        return None;
    }
    uuid::Uuid::parse_str(text).ok()
}
