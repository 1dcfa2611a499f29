pub mod compile;
pub use compile::{Compiler, Predicate};

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
