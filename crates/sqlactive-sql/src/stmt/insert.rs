use super::{check_record, column_value, Statement};

use sqlactive_core::{
    schema::Model,
    stmt::{Value, ValueRecord},
    Error, Result,
};

/// Inserts one row.
///
/// Auto-increment columns are left out so the store assigns them. An insert
/// with no columns left renders as `DEFAULT VALUES`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Value>,
}

impl Statement {
    pub fn insert(model: &Model, record: &ValueRecord) -> Result<Statement> {
        check_record(model, record)?;

        let mut columns = vec![];
        let mut values = vec![];

        for column in model.stored_columns() {
            if column.is_auto_increment() {
                continue;
            }

            let value = column_value(model, column, record)?;

            if (!column.is_nullable() || column.is_primary_key()) && value.is_null_or_nil() {
                return Err(Error::null_constraint(&model.table, &column.name));
            }

            columns.push(column.name.clone());
            values.push(value);
        }

        Ok(Insert {
            table: model.table.clone(),
            columns,
            values,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
