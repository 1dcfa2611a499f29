use super::{primary_key, Statement};

use sqlactive_core::{
    schema::Model,
    stmt::{Value, ValueRecord},
    Result,
};

/// Deletes one row, matched by primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,
    pub key: (String, Value),
}

impl Statement {
    pub fn delete(model: &Model, record: &ValueRecord) -> Result<Statement> {
        let key = primary_key(model, record)?;

        Ok(Delete {
            table: model.table.clone(),
            key,
        }
        .into())
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
