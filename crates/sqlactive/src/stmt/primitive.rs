use crate::Result;

use chrono::{DateTime, Utc};
use sqlactive_core::stmt::{Type, Value};
use uuid::Uuid;

/// A field type with a storage mapping.
///
/// Enumerations implement this by hand: `ty` returns a [`Type::Enum`] listing
/// the variants and `load` maps the stored discriminant back to a variant.
pub trait Primitive: Sized {
    fn ty() -> Type;

    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $variant:ident($t:ty) ),* ) => {
        $(
            impl Primitive for $t {
                fn ty() -> Type {
                    Type::$variant
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive!(
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Bytes(Vec<u8>)
);

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::load(value).map(Some)
        }
    }
}
