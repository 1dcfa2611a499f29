use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use sqlactive_core::Storage;

/// Adapts a stored value to rusqlite parameter and row types.
#[derive(Debug)]
pub struct Value<'a>(&'a Storage);

impl<'a> From<&'a Storage> for Value<'a> {
    fn from(value: &'a Storage) -> Self {
        Self(value)
    }
}

impl Value<'_> {
    /// Reads column `index` of a row.
    pub fn from_sql(row: &Row, index: usize) -> rusqlite::Result<Storage> {
        let value: SqlValue = row.get(index)?;

        Ok(match value {
            SqlValue::Null => Storage::Null,
            SqlValue::Integer(value) => Storage::Integer(value),
            SqlValue::Real(value) => Storage::Real(value),
            SqlValue::Text(value) => Storage::Text(value),
            SqlValue::Blob(value) => Storage::Blob(value),
        })
    }
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            Storage::Null => ToSqlOutput::Owned(SqlValue::Null),
            Storage::Integer(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            Storage::Real(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            Storage::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            Storage::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
        })
    }
}
