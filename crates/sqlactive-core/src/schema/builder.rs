use super::{Column, Model, SqlType};
use crate::{codec, err, stmt::Type, Error, Result};

use std::collections::HashSet;

pub const PRIMARY_KEY: &str = "PRIMARY KEY";
pub const AUTO_INCREMENT: &str = "AUTOINCREMENT";
pub const NOT_NULL: &str = "NOT NULL";

/// Declares a model's table mapping.
///
/// ```
/// use sqlactive_core::{schema::{Field, Model}, stmt::Type};
///
/// let model = Model::builder("User")
///     .table("Users")
///     .field(Field::new("id", Type::I64).primary_key().auto_increment())
///     .field(Field::new("name", Type::String).not_null())
///     .field(Field::new("age", Type::I32))
///     .build()
///     .unwrap();
///
/// assert_eq!(model.table, "Users");
/// assert_eq!(model.primary_key().name, "id");
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    name: String,
    table: Option<String>,
    fields: Vec<Field>,
}

/// One field of a model declaration.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    column: Option<String>,
    ty: Type,
    primary_key: Option<String>,
    auto_increment: Option<String>,
    not_null: Option<String>,
    ignored: bool,
    max_length: Option<u32>,
}

impl Builder {
    pub fn new(name: impl Into<String>) -> Builder {
        Builder {
            name: name.into(),
            table: None,
            fields: vec![],
        }
    }

    /// Sets the table name. An empty name falls back to the model name.
    pub fn table(mut self, table: impl Into<String>) -> Builder {
        self.table = Some(table.into());
        self
    }

    pub fn field(mut self, field: Field) -> Builder {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<Model> {
        let table = match self.table {
            Some(table) if !table.is_empty() => table,
            _ => self.name.clone(),
        };

        if table.is_empty() {
            return Err(Error::invalid_model(self.name, "no table name"));
        }

        let mut columns = Vec::with_capacity(self.fields.len());
        let mut names = HashSet::new();
        let mut primary_key = None;

        for (index, field) in self.fields.into_iter().enumerate() {
            let column = field.into_column(index, &self.name)?;

            // SQLite identifiers are case-insensitive
            if !names.insert(column.name.to_lowercase()) {
                return Err(Error::invalid_model(
                    &self.name,
                    format!("column `{}` is declared more than once", column.name),
                ));
            }

            if column.is_primary_key() {
                if primary_key.is_some() {
                    return Err(Error::invalid_model(
                        &self.name,
                        "more than one primary key column",
                    ));
                }
                primary_key = Some(index);
            }

            columns.push(column);
        }

        let Some(primary_key) = primary_key else {
            return Err(Error::invalid_model(self.name, "no primary key column"));
        };

        Ok(Model {
            name: self.name,
            table,
            columns,
            primary_key,
        })
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Field {
        Field {
            name: name.into(),
            column: None,
            ty: ty.into(),
            primary_key: None,
            auto_increment: None,
            not_null: None,
            ignored: false,
            max_length: None,
        }
    }

    pub fn primary_key(self) -> Field {
        self.primary_key_with(PRIMARY_KEY)
    }

    /// Marks the field as primary key with a custom SQL marker.
    pub fn primary_key_with(mut self, keyword: impl Into<String>) -> Field {
        self.primary_key = Some(keyword.into());
        self
    }

    pub fn auto_increment(self) -> Field {
        self.auto_increment_with(AUTO_INCREMENT)
    }

    pub fn auto_increment_with(mut self, keyword: impl Into<String>) -> Field {
        self.auto_increment = Some(keyword.into());
        self
    }

    pub fn not_null(self) -> Field {
        self.not_null_with(NOT_NULL)
    }

    pub fn not_null_with(mut self, keyword: impl Into<String>) -> Field {
        self.not_null = Some(keyword.into());
        self
    }

    /// Keeps the field out of the table.
    pub fn ignore(mut self) -> Field {
        self.ignored = true;
        self
    }

    /// Stores the field under a different column name.
    pub fn column_name(mut self, name: impl Into<String>) -> Field {
        self.column = Some(name.into());
        self
    }

    /// Declares a string field as `VARCHAR(len)`.
    pub fn max_length(mut self, len: u32) -> Field {
        self.max_length = Some(len);
        self
    }

    fn into_column(self, index: usize, model: &str) -> Result<Column> {
        let name = self.column.clone().unwrap_or_else(|| self.name.clone());

        if name.is_empty() {
            return Err(Error::invalid_model(
                model,
                format!("field `{}` has an empty column name", self.name),
            ));
        }

        let storage_ty = if self.ignored {
            if self.primary_key.is_some() {
                return Err(Error::invalid_model(
                    model,
                    format!("primary key `{}` cannot be ignored", self.name),
                ));
            }
            None
        } else {
            Some(self.storage_ty(model)?)
        };

        Ok(Column {
            index,
            field: self.name,
            name,
            ty: self.ty,
            storage_ty,
            primary_key: self.primary_key,
            auto_increment: self.auto_increment,
            not_null: self.not_null,
            ignored: self.ignored,
        })
    }

    fn storage_ty(&self, model: &str) -> Result<SqlType> {
        let mut storage_ty = codec::resolve_sql_type(&self.ty)
            .map_err(|err| err.context(err!("field `{}` of model `{}`", self.name, model)))?;

        if let Some(len) = self.max_length {
            if !self.ty.is_string() {
                return Err(Error::invalid_model(
                    model,
                    format!("max length on non-string field `{}`", self.name),
                ));
            }
            storage_ty = SqlType::VarChar(Some(len));
        }

        if self.auto_increment.is_some() {
            if self.primary_key.is_none() || !self.ty.is_integer() {
                return Err(Error::invalid_model(
                    model,
                    format!(
                        "auto-increment field `{}` must be an integer primary key",
                        self.name
                    ),
                ));
            }

            // SQLite only accepts AUTOINCREMENT on `INTEGER PRIMARY KEY`
            storage_ty = SqlType::Integer;
        }

        Ok(storage_ty)
    }
}
