use std::fmt;

/// Column types as they appear in `CREATE TABLE` statements.
///
/// SQLite only cares about type affinity, so these names are what the schema
/// records rather than a hard constraint on stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Integer,
    BigInt,
    Float,

    /// Variable-length text with an optional maximum length.
    VarChar(Option<u32>),

    Blob,
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlType::Integer => f.write_str("INTEGER"),
            SqlType::BigInt => f.write_str("BIGINT"),
            SqlType::Float => f.write_str("FLOAT"),
            SqlType::VarChar(None) => f.write_str("VARCHAR"),
            SqlType::VarChar(Some(len)) => write!(f, "VARCHAR({len})"),
            SqlType::Blob => f.write_str("BLOB"),
        }
    }
}
