use super::Statement;
use crate::Predicate;

use sqlactive_core::schema::Model;

/// Selects every column of a table, optionally filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub filter: Option<Predicate>,
}

impl Statement {
    pub fn select_all(model: &Model) -> Statement {
        Select {
            table: model.table.clone(),
            filter: None,
        }
        .into()
    }

    pub fn select_where(model: &Model, filter: Predicate) -> Statement {
        Select {
            table: model.table.clone(),
            filter: Some(filter),
        }
        .into()
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
