mod row;
pub use row::Row;

use crate::{Result, Storage};

use std::fmt::Debug;

/// Opens connections to a store.
///
/// The engine asks for a fresh connection per operation and drops it when the
/// operation ends, on success and on error alike.
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection string or URL the driver was built from, for logging.
    fn url(&self) -> &str;

    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A single open handle on the store.
pub trait Connection {
    /// Executes a statement and returns the number of affected rows.
    fn execute(&mut self, sql: &str, params: &[Storage]) -> Result<u64>;

    /// Executes a statement, then returns the row id the store assigned to the
    /// last inserted row.
    fn execute_returning_id(&mut self, sql: &str, params: &[Storage]) -> Result<i64>;

    /// Runs a query and collects every returned row.
    fn query(&mut self, sql: &str, params: &[Storage]) -> Result<Vec<Row>>;

    fn begin(&mut self) -> Result<()> {
        self.execute("BEGIN TRANSACTION", &[]).map(|_| ())
    }

    fn commit(&mut self) -> Result<()> {
        self.execute("COMMIT", &[]).map(|_| ())
    }

    fn rollback(&mut self) -> Result<()> {
        self.execute("ROLLBACK", &[]).map(|_| ())
    }
}
