pub mod db;
pub use db::Db;

mod model;
pub use model::Model;

pub mod stmt;
pub use stmt::{Expr, IntoExpr, Path, Primitive};

pub use sqlactive_core::{bail, err, schema, Error, Result};

/// Low-level building blocks: the untyped expression tree, the codec, and the
/// SQL serializer.
pub mod raw {
    pub use sqlactive_core::{codec, driver, stmt, Storage};
    pub use sqlactive_sql::{Compiler, Predicate, Serializer, Statement};
}

#[cfg(feature = "sqlite")]
pub use sqlactive_driver_sqlite as sqlite;
