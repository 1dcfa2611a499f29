#[macro_use]
mod macros;

pub mod models;

mod setup;
pub use setup::{Setup, SetupSqliteFile, SetupSqliteMemory};

pub use sqlactive::Db;
