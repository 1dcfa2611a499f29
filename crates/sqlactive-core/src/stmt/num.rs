use super::Value;
use crate::Error;

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
    F32(f32)
    F64(f64)
}

// Integer conversions accept any integer variant and range-check the result,
// so a value widened for storage narrows back to its field type.
macro_rules! impl_try_from_int {
    ( $( $ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let converted = match &value {
                        Value::I8(val) => <$ty>::try_from(*val).ok(),
                        Value::I16(val) => <$ty>::try_from(*val).ok(),
                        Value::I32(val) => <$ty>::try_from(*val).ok(),
                        Value::I64(val) => <$ty>::try_from(*val).ok(),
                        Value::U8(val) => <$ty>::try_from(*val).ok(),
                        Value::U16(val) => <$ty>::try_from(*val).ok(),
                        Value::U32(val) => <$ty>::try_from(*val).ok(),
                        Value::U64(val) => <$ty>::try_from(*val).ok(),
                        Value::String(s) => s.parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_try_from_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(val) => Ok(val),
            Value::F32(val) => Ok(val.into()),
            Value::I32(val) => Ok(val.into()),
            Value::I64(val) => Ok(val as f64),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(val) => Ok(val),
            Value::F64(val) => Ok(val as f32),
            Value::I64(val) => Ok(val as f32),
            _ => Err(Error::type_conversion(value, "f32")),
        }
    }
}
