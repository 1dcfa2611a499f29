//! Statements generated from a model descriptor.
//!
//! Constructors validate the model and record before anything is rendered, so
//! a statement that exists is one that can be sent to the store.

mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use sqlactive_core::{
    schema::{Column, Model},
    stmt::{Value, ValueRecord},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Returns `true` if the statement reads rows instead of changing them.
    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    /// Name of the table the statement targets.
    pub fn table(&self) -> &str {
        match self {
            Statement::CreateTable(stmt) => &stmt.table,
            Statement::Delete(stmt) => &stmt.table,
            Statement::DropTable(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Select(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }
}

/// Checks that `record` holds one value per declared field.
fn check_record(model: &Model, record: &ValueRecord) -> Result<()> {
    if record.len() != model.columns.len() {
        return Err(Error::invalid_model(
            &model.name,
            format!(
                "record has {} values but the model declares {} fields",
                record.len(),
                model.columns.len()
            ),
        ));
    }
    Ok(())
}

/// Returns the record's value for `column`, checked against the column type.
fn column_value(model: &Model, column: &Column, record: &ValueRecord) -> Result<Value> {
    let value = &record[column.index];

    if !value.is_a(&column.ty) {
        return Err(Error::type_conversion(value.clone(), column.ty.to_string()).context(
            sqlactive_core::err!("column `{}` in table `{}`", column.name, model.table),
        ));
    }

    Ok(value.clone())
}

/// Returns the record's primary key, rejecting null and default keys.
fn primary_key(model: &Model, record: &ValueRecord) -> Result<(String, Value)> {
    check_record(model, record)?;

    let column = model.primary_key();
    let value = column_value(model, column, record)?;

    if value.is_missing_key() {
        return Err(Error::missing_primary_key(
            &model.table,
            &column.name,
            &value,
        ));
    }

    Ok((column.name.clone(), value))
}
