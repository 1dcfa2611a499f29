use super::SqlType;
use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Position of the field in the model's declaration order.
    pub index: usize,

    /// The field name, as used by filter expressions.
    pub field: String,

    /// The name of the column in the database.
    pub name: String,

    /// The column type, from the model's point of view.
    pub ty: stmt::Type,

    /// The database storage type of the column. `None` for ignored fields,
    /// which are never stored.
    pub storage_ty: Option<SqlType>,

    /// Primary key marker keyword, present if the column is the primary key.
    pub primary_key: Option<String>,

    /// Auto-increment marker keyword, present if the store assigns the value.
    pub auto_increment: Option<String>,

    /// Not-null marker keyword, present if the column rejects null.
    pub not_null: Option<String>,

    /// True if the field is kept out of every statement and of row
    /// materialization.
    pub ignored: bool,
}

impl Column {
    pub fn is_primary_key(&self) -> bool {
        self.primary_key.is_some()
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment.is_some()
    }

    pub fn is_nullable(&self) -> bool {
        self.not_null.is_none()
    }

    /// Returns `true` if the column takes part in generated SQL.
    pub fn is_stored(&self) -> bool {
        !self.ignored
    }

    /// Column markers in declaration order: primary key, auto-increment, then
    /// not-null. Only the markers that apply are yielded.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        [&self.primary_key, &self.auto_increment, &self.not_null]
            .into_iter()
            .filter_map(|keyword| keyword.as_deref())
    }
}
