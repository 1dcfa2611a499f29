//! Model descriptors: how a record type maps onto a table.

mod builder;
pub use builder::{Builder, Field};

mod column;
pub use column::Column;

mod model;
pub use model::Model;

mod sql_type;
pub use sql_type::SqlType;
