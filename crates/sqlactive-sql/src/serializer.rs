#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

pub(crate) mod ident;
use ident::Ident;

pub(crate) mod literal;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    /// Wrap the statement in `BEGIN TRANSACTION;` / `END TRANSACTION;` markers.
    ///
    /// The markers are textual only. A framed statement is meant for logs and
    /// for tools that replay SQL scripts, not for execution through a prepared
    /// statement.
    framed: bool,
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    pub fn framed(mut self, framed: bool) -> Serializer {
        self.framed = framed;
        self
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        if self.framed {
            ret.push_str("BEGIN TRANSACTION;\n");
        }

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');

        if self.framed {
            ret.push_str("\nEND TRANSACTION;");
        }

        ret
    }
}
