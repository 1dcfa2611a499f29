use tests::{models::User, *};

use std::sync::Arc;

use sqlactive::{
    raw::stmt::{Type, Value, ValueRecord},
    schema::{Builder, Column, Field},
    Model, Result,
};

#[derive(Debug, Default)]
struct NoKey {
    name: String,
}

impl Model for NoKey {
    fn schema() -> Builder {
        Builder::new("NoKey").field(Field::new("name", Type::String))
    }

    fn record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![self.name.clone().into()])
    }

    fn load(&mut self, _column: &Column, value: Value) -> Result<()> {
        self.name = value.try_into()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Counter {
    id: i64,
    hits: u64,
}

impl Model for Counter {
    fn schema() -> Builder {
        Builder::new("Counter")
            .field(Field::new("id", Type::I64).primary_key())
            .field(Field::new("hits", Type::U64))
    }

    fn record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![self.id.into(), self.hits.into()])
    }

    fn load(&mut self, column: &Column, value: Value) -> Result<()> {
        match column.index {
            0 => self.id = value.try_into()?,
            _ => self.hits = value.try_into()?,
        }
        Ok(())
    }
}

#[test]
fn registered_model_without_key_fails_to_build() {
    let s = SetupSqliteMemory;
    let err = assert_err!(s.connect(&mut models!(NoKey)));

    assert!(err.root().is_invalid_model(), "{err}");
    assert!(err.to_string().contains("no primary key column"), "{err}");
}

#[test]
fn unregistered_model_fails_on_first_use() {
    let db = SetupSqliteMemory.setup(sqlactive::Db::builder());

    let err = assert_err!(db.create_table::<Counter>());
    assert!(err.root().is_unsupported_type(), "{err}");

    // The failure is not cached
    let err = assert_err!(db.select_all::<Counter>());
    assert!(err.root().is_unsupported_type(), "{err}");
}

#[test]
fn registered_descriptor_is_reused() {
    let db = SetupSqliteMemory.setup(models!(User));

    let first = assert_ok!(db.schema::<User>());
    let second = assert_ok!(db.clone().schema::<User>());
    assert!(Arc::ptr_eq(&first, &second));

    assert_eq!(first.table, "Users");
    assert_eq!(first.primary_key().name, "id");
}

#[test]
fn bad_connection_strings_are_rejected() {
    for conn_str in [
        "busy_timeout=10",
        "path=test.db;busy_timeout=soon",
        "path=test.db;colour=blue",
        "path=test.db;version=2",
    ] {
        let err = assert_err!(Db::builder().connect(conn_str), "conn_str={conn_str}");
        assert!(err.is_invalid_connection_string(), "{err}");
    }
}
