use super::{ColumnDef, Statement};

use sqlactive_core::{schema::Model, Error, Result};

/// A statement to create a SQL table.
///
/// Always rendered with `IF NOT EXISTS`, so creating a table twice is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table.
    pub table: String,

    /// Column definitions.
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    pub fn create_table(model: &Model) -> Result<Statement> {
        let columns = model
            .stored_columns()
            .map(ColumnDef::from_schema)
            .collect::<Result<Vec<_>>>()?;

        if columns.is_empty() {
            return Err(Error::invalid_model(&model.name, "no stored columns"));
        }

        Ok(CreateTable {
            table: model.table.clone(),
            columns,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
