use crate::{schema, Result};

use sqlactive_core::stmt::{Value, ValueRecord};

/// A record type mapped to one table.
///
/// The mapping is declared explicitly by [`Model::schema`]; nothing is
/// inferred from the Rust type. Rows are materialized by starting from
/// `Default::default()` and loading each stored column in turn, so ignored
/// fields keep their default value.
///
/// ```
/// use sqlactive::{schema::{Builder, Column, Field}, Model, Primitive, Result};
/// use sqlactive::raw::stmt::{Type, Value, ValueRecord};
///
/// #[derive(Debug, Default)]
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl Model for User {
///     fn schema() -> Builder {
///         Builder::new("User")
///             .table("Users")
///             .field(Field::new("id", Type::I64).primary_key().auto_increment())
///             .field(Field::new("name", Type::String).not_null())
///     }
///
///     fn record(&self) -> ValueRecord {
///         ValueRecord::from_vec(vec![self.id.into(), self.name.clone().into()])
///     }
///
///     fn load(&mut self, column: &Column, value: Value) -> Result<()> {
///         match column.index {
///             0 => self.id = Primitive::load(value)?,
///             1 => self.name = Primitive::load(value)?,
///             _ => {}
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Model: Default + Sized + 'static {
    /// Declares the table this type maps to.
    fn schema() -> schema::Builder;

    /// Returns one value per declared field, in declaration order. Values of
    /// ignored fields are never read.
    fn record(&self) -> ValueRecord;

    /// Stores a value read back from the database into the field described by
    /// `column`.
    fn load(&mut self, column: &schema::Column, value: Value) -> Result<()>;
}
