use sqlactive_core::{schema::{Column, SqlType}, Error, Result};

/// A column in a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Name of the column.
    pub name: String,

    /// Storage type of the column.
    pub ty: SqlType,

    /// Markers following the type, in order.
    pub keywords: Vec<String>,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> Result<ColumnDef> {
        let Some(ty) = column.storage_ty else {
            return Err(Error::invalid_model(
                &column.field,
                "ignored fields have no column definition",
            ));
        };

        Ok(ColumnDef {
            name: column.name.clone(),
            ty,
            keywords: column.keywords().map(str::to_string).collect(),
        })
    }
}
