use super::{column_value, primary_key, Statement};

use sqlactive_core::{
    schema::Model,
    stmt::{Value, ValueRecord},
    Error, Result,
};

/// Updates one row, matched by primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// `(column, value)` pairs for the `SET` clause.
    pub assignments: Vec<(String, Value)>,

    /// Primary key column and value for the `WHERE` clause.
    pub key: (String, Value),
}

impl Statement {
    pub fn update(model: &Model, record: &ValueRecord) -> Result<Statement> {
        let key = primary_key(model, record)?;

        let mut assignments = vec![];

        for column in model.stored_columns() {
            if column.is_auto_increment() || column.is_primary_key() {
                continue;
            }

            let value = column_value(model, column, record)?;

            if !column.is_nullable() && value.is_null_or_nil() {
                return Err(Error::null_constraint(&model.table, &column.name));
            }

            assignments.push((column.name.clone(), value));
        }

        if assignments.is_empty() {
            return Err(Error::invalid_model(
                &model.name,
                "no columns to update besides the primary key",
            ));
        }

        Ok(Update {
            table: model.table.clone(),
            assignments,
            key,
        }
        .into())
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
