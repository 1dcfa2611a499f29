//! Sample models shared by the integration tests.

use chrono::{DateTime, Utc};
use sqlactive::{
    raw::stmt::{Type, TypeEnum, Value, ValueRecord},
    schema::{Builder, Column, Field},
    Error, Expr, IntoExpr, Model, Path, Primitive, Result,
};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,

    /// Never stored.
    pub email: String,
}

impl User {
    pub const ID: Path<i64> = Path::new("id");
    pub const NAME: Path<String> = Path::new("name");
    pub const AGE: Path<i32> = Path::new("age");
    pub const EMAIL: Path<String> = Path::new("email");

    pub fn new(name: &str, age: i32) -> User {
        User {
            name: name.to_string(),
            age,
            ..User::default()
        }
    }
}

impl Model for User {
    fn schema() -> Builder {
        Builder::new("User")
            .table("Users")
            .field(Field::new("id", Type::I64).primary_key().auto_increment())
            .field(Field::new("name", Type::String).not_null().max_length(64))
            .field(Field::new("age", Type::I32))
            .field(Field::new("email", Type::String).ignore())
    }

    fn record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.id.into(),
            self.name.clone().into(),
            self.age.into(),
            self.email.clone().into(),
        ])
    }

    fn load(&mut self, column: &Column, value: Value) -> Result<()> {
        match column.field.as_str() {
            "id" => self.id = Primitive::load(value)?,
            "name" => self.name = Primitive::load(value)?,
            "age" => self.age = Primitive::load(value)?,
            _ => {}
        }
        Ok(())
    }
}

/// A model whose not-null column can still be left empty from Rust.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Note {
    pub const TITLE: Path<Option<String>> = Path::new("title");
    pub const BODY: Path<Option<String>> = Path::new("body");
}

impl Model for Note {
    fn schema() -> Builder {
        Builder::new("Note")
            .field(
                Field::new("id", Type::I64)
                    .primary_key()
                    .auto_increment()
                    .column_name("NoteID"),
            )
            .field(Field::new("title", Type::String).not_null().column_name("Title"))
            .field(Field::new("body", Type::String).column_name("Body"))
    }

    fn record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.id.into(),
            self.title.clone().into(),
            self.body.clone().into(),
        ])
    }

    fn load(&mut self, column: &Column, value: Value) -> Result<()> {
        match column.index {
            0 => self.id = Primitive::load(value)?,
            1 => self.title = Primitive::load(value)?,
            2 => self.body = Primitive::load(value)?,
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[default]
    Offline,
    Online,
    Retired,
}

impl Primitive for Status {
    fn ty() -> Type {
        TypeEnum::new("Status")
            .variant("Offline", 0)
            .variant("Online", 1)
            .variant("Retired", 2)
            .into()
    }

    fn load(value: Value) -> Result<Status> {
        match value {
            Value::Enum(0) => Ok(Status::Offline),
            Value::Enum(1) => Ok(Status::Online),
            Value::Enum(2) => Ok(Status::Retired),
            value => Err(Error::type_conversion(value, "Status")),
        }
    }
}

impl From<Status> for Value {
    fn from(value: Status) -> Value {
        Value::Enum(value as i64)
    }
}

impl IntoExpr<Status> for Status {
    fn into_expr(self) -> Expr<Status> {
        Expr::from_value(self.into())
    }
}

/// A model keyed by a caller-assigned identifier, with one field of every
/// other storable kind.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Device {
    pub id: Uuid,
    pub label: String,
    pub status: Status,
    pub active: bool,
    pub score: f64,
    pub seen_at: DateTime<Utc>,
    pub firmware: Option<Vec<u8>>,
}

impl Device {
    pub const ID: Path<Uuid> = Path::new("id");
    pub const LABEL: Path<String> = Path::new("label");
    pub const STATUS: Path<Status> = Path::new("status");
    pub const ACTIVE: Path<bool> = Path::new("active");
    pub const SCORE: Path<f64> = Path::new("score");
    pub const SEEN_AT: Path<DateTime<Utc>> = Path::new("seen_at");

    pub fn new(label: &str) -> Device {
        Device {
            id: Uuid::new_v4(),
            label: label.to_string(),
            ..Device::default()
        }
    }
}

impl Model for Device {
    fn schema() -> Builder {
        Builder::new("Device")
            .table("Devices")
            .field(Field::new("id", Type::Uuid).primary_key())
            .field(Field::new("label", Type::String).not_null())
            .field(Field::new("status", Status::ty()))
            .field(Field::new("active", Type::Bool))
            .field(Field::new("score", Type::F64))
            .field(Field::new("seen_at", Type::DateTime))
            .field(Field::new("firmware", Type::Bytes))
    }

    fn record(&self) -> ValueRecord {
        ValueRecord::from_vec(vec![
            self.id.into(),
            self.label.clone().into(),
            self.status.into(),
            self.active.into(),
            self.score.into(),
            self.seen_at.into(),
            self.firmware.clone().into(),
        ])
    }

    fn load(&mut self, column: &Column, value: Value) -> Result<()> {
        match column.field.as_str() {
            "id" => self.id = Primitive::load(value)?,
            "label" => self.label = Primitive::load(value)?,
            "status" => self.status = Primitive::load(value)?,
            "active" => self.active = Primitive::load(value)?,
            "score" => self.score = Primitive::load(value)?,
            "seen_at" => self.seen_at = Primitive::load(value)?,
            "firmware" => self.firmware = Primitive::load(value)?,
            _ => {}
        }
        Ok(())
    }
}
