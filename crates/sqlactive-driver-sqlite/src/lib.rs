mod connection_string;
pub use connection_string::{ConnectionString, JournalMode, Location};

mod value;
pub(crate) use value::Value;

use rusqlite::{params_from_iter, Connection as RusqliteConnection, OpenFlags};
use sqlactive_core::{driver::Row, Error, Result, Storage};
use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

static MEMORY_DATABASES: AtomicUsize = AtomicUsize::new(0);

/// SQLite driver. Opens a new connection for every engine operation.
#[derive(Debug)]
pub struct Sqlite {
    url: String,
    config: ConnectionString,
    memory: Option<Memory>,
}

/// A named shared-cache in-memory database.
///
/// SQLite frees an in-memory database when its last connection closes, so the
/// driver holds one connection open for as long as it lives.
#[derive(Debug)]
struct Memory {
    uri: String,
    _anchor: Mutex<RusqliteConnection>,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection string or `sqlite:` URL.
    pub fn new(conn_str: impl Into<String>) -> Result<Self> {
        let url = conn_str.into();
        let config = ConnectionString::parse(&url)?;
        Self::from_config(url, config)
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        Self::new("path=:memory:")
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Self::from_config(
            format!("path={}", path.display()),
            ConnectionString {
                location: Location::File(path.to_path_buf()),
                busy_timeout: None,
                foreign_keys: None,
                journal_mode: None,
                create_dir: false,
            },
        )
    }

    fn from_config(url: String, config: ConnectionString) -> Result<Self> {
        let memory = match config.location {
            Location::Memory => {
                let id = MEMORY_DATABASES.fetch_add(1, Ordering::Relaxed);
                let uri = format!("file:sqlactive-mem-{id}?mode=memory&cache=shared");
                let anchor = open_uri(&uri)?;
                Some(Memory {
                    uri,
                    _anchor: Mutex::new(anchor),
                })
            }
            Location::File(_) => None,
        };

        Ok(Sqlite {
            url,
            config,
            memory,
        })
    }
}

impl sqlactive_core::Driver for Sqlite {
    fn url(&self) -> &str {
        &self.url
    }

    fn connect(&self) -> Result<Box<dyn sqlactive_core::Connection>> {
        let connection = match (&self.config.location, &self.memory) {
            (Location::File(path), _) => Connection::open(path, self.config.create_dir)?,
            (Location::Memory, Some(memory)) => Connection {
                connection: open_uri(&memory.uri)?,
            },
            (Location::Memory, None) => {
                return Err(sqlactive_core::err!("in-memory database was not initialized"))
            }
        };

        connection.configure(&self.config)?;

        tracing::trace!(url = %self.url, "opened sqlite connection");
        Ok(Box::new(connection))
    }
}

fn open_uri(uri: &str) -> Result<RusqliteConnection> {
    RusqliteConnection::open_with_flags(
        uri,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(Error::backend)
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn open<P: AsRef<Path>>(path: P, create_dir: bool) -> Result<Self> {
        let path = path.as_ref();

        if create_dir {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }

        let connection = RusqliteConnection::open(path).map_err(Error::backend)?;
        Ok(Self { connection })
    }

    fn configure(&self, config: &ConnectionString) -> Result<()> {
        if let Some(timeout) = config.busy_timeout {
            self.connection
                .busy_timeout(timeout)
                .map_err(Error::backend)?;
        }

        if let Some(enabled) = config.foreign_keys {
            self.connection
                .pragma_update(None, "foreign_keys", enabled)
                .map_err(Error::backend)?;
        }

        if let Some(mode) = config.journal_mode {
            let applied: String = self
                .connection
                .pragma_update_and_check(None, "journal_mode", mode.as_str(), |row| row.get(0))
                .map_err(Error::backend)?;

            // In-memory databases silently keep the `memory` journal
            tracing::trace!(requested = mode.as_str(), applied = %applied, "set journal mode");
        }

        Ok(())
    }
}

impl sqlactive_core::Connection for Connection {
    fn execute(&mut self, sql: &str, params: &[Storage]) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(|err| Error::backend_execution(sql, err))?;

        let count = stmt
            .execute(params_from_iter(params.iter().map(Value::from)))
            .map_err(|err| Error::backend_execution(sql, err))?;

        tracing::trace!(sql, count, "executed statement");
        Ok(count as u64)
    }

    fn execute_returning_id(&mut self, sql: &str, params: &[Storage]) -> Result<i64> {
        self.execute(sql, params)?;

        let id = self
            .connection
            .query_row("select last_insert_rowid()", [], |row| row.get(0))
            .map_err(|err| Error::backend_execution("select last_insert_rowid()", err))?;

        Ok(id)
    }

    fn query(&mut self, sql: &str, params: &[Storage]) -> Result<Vec<Row>> {
        let mut stmt = self
            .connection
            .prepare_cached(sql)
            .map_err(|err| Error::backend_execution(sql, err))?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt
            .query(params_from_iter(params.iter().map(Value::from)))
            .map_err(|err| Error::backend_execution(sql, err))?;

        let mut ret = vec![];

        while let Some(row) = rows
            .next()
            .map_err(|err| Error::backend_execution(sql, err))?
        {
            let mut values = Row::new();
            for (index, name) in columns.iter().enumerate() {
                let value =
                    Value::from_sql(row, index).map_err(|err| Error::backend_execution(sql, err))?;
                values.push(name.clone(), value);
            }
            ret.push(values);
        }

        tracing::trace!(sql, rows = ret.len(), "ran query");
        Ok(ret)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        tracing::trace!("closed sqlite connection");
    }
}
