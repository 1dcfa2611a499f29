use super::{Formatter, ToSql};

use sqlactive_core::stmt;

/// Collects the values bound by a statement's placeholders.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// A positional parameter. Rendered as `?`, so parameters bind in the order
/// they are pushed.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('?');
    }
}

impl ToSql for &stmt::Value {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        placeholder.to_sql(f);
    }
}
