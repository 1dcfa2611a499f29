use sqlactive_core::stmt::Value;

/// Renders a value as an SQL literal, or `None` if it has no literal form and
/// must be bound as a parameter.
///
/// Booleans are written as `1`/`0`, matching how they are stored. Non-finite
/// floats have no literal form in SQLite.
pub(crate) fn render(value: &Value) -> Option<String> {
    Some(match value {
        Value::Bool(value) => (if *value { "1" } else { "0" }).to_string(),
        Value::I8(value) => value.to_string(),
        Value::I16(value) => value.to_string(),
        Value::I32(value) => value.to_string(),
        Value::I64(value) => value.to_string(),
        Value::U8(value) => value.to_string(),
        Value::U16(value) => value.to_string(),
        Value::U32(value) => value.to_string(),
        Value::U64(value) => value.to_string(),
        Value::F32(value) if value.is_finite() => value.to_string(),
        Value::F64(value) if value.is_finite() => value.to_string(),
        Value::String(value) => string(value),
        _ => return None,
    })
}

/// Single-quotes a string, doubling embedded quotes.
pub(crate) fn string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
