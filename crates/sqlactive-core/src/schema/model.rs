use super::{Builder, Column};

/// Describes how one record type maps onto a table.
///
/// Descriptors are built once through [`Builder`] and are read-only afterwards.
/// Building the same declaration twice yields equal descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Name of the record type.
    pub name: String,

    /// Name of the table in the database.
    pub table: String,

    /// Every declared field in declaration order, ignored fields included.
    pub columns: Vec<Column>,

    /// Index into `columns` of the primary key.
    pub primary_key: usize,
}

impl Model {
    pub fn builder(name: impl Into<String>) -> Builder {
        Builder::new(name)
    }

    pub fn primary_key(&self) -> &Column {
        &self.columns[self.primary_key]
    }

    /// Columns that appear in generated SQL.
    pub fn stored_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.is_stored())
    }

    /// Finds a column by field name, falling back to the storage name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.field == name)
            .or_else(|| self.columns.iter().find(|column| column.name == name))
    }
}
