use sqlactive_core::{Error, Result};

use percent_encoding::percent_decode_str;
use std::{path::PathBuf, str::FromStr, time::Duration};
use url::Url;

/// Parsed connection settings.
///
/// Two forms are accepted:
///
/// * `path=<dir>/<file>;key=value;...` with case-insensitive keys, and
///   `path=:memory:` for an in-memory store.
/// * `sqlite:<path>` or `sqlite::memory:` URLs, with the same keys as query
///   parameters.
///
/// Recognized keys are `path`, `busy_timeout` (milliseconds), `foreign_keys`,
/// `journal_mode`, `create_dir`, and `version` (which must be `3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    pub location: Location,
    pub busy_timeout: Option<Duration>,
    pub foreign_keys: Option<bool>,
    pub journal_mode: Option<JournalMode>,

    /// Create missing parent directories of the database file on connect.
    pub create_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalMode {
    Delete,
    Truncate,
    Persist,
    Memory,
    Wal,
    Off,
}

impl ConnectionString {
    pub fn parse(input: &str) -> Result<ConnectionString> {
        let input = input.trim();

        if input.starts_with("sqlite:") {
            return ConnectionString::parse_url(input);
        }

        let mut builder = Partial::default();

        for segment in input.split(';') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            let Some((key, value)) = segment.split_once('=') else {
                return Err(Error::invalid_connection_string(format!(
                    "expected `key=value`, found `{segment}`"
                )));
            };

            builder.set(key.trim(), value.trim())?;
        }

        builder.finish()
    }

    fn parse_url(input: &str) -> Result<ConnectionString> {
        let url = Url::parse(input)
            .map_err(|err| Error::invalid_connection_string(format!("{input}: {err}")))?;

        let path = percent_decode_str(url.path())
            .decode_utf8()
            .map_err(|err| Error::invalid_connection_string(format!("{input}: {err}")))?;

        let mut builder = Partial::default();
        builder.set("path", &path)?;

        for (key, value) in url.query_pairs() {
            builder.set(&key, &value)?;
        }

        builder.finish()
    }
}

impl FromStr for ConnectionString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ConnectionString::parse(s)
    }
}

impl JournalMode {
    pub fn as_str(self) -> &'static str {
        match self {
            JournalMode::Delete => "DELETE",
            JournalMode::Truncate => "TRUNCATE",
            JournalMode::Persist => "PERSIST",
            JournalMode::Memory => "MEMORY",
            JournalMode::Wal => "WAL",
            JournalMode::Off => "OFF",
        }
    }
}

impl FromStr for JournalMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "delete" => JournalMode::Delete,
            "truncate" => JournalMode::Truncate,
            "persist" => JournalMode::Persist,
            "memory" => JournalMode::Memory,
            "wal" => JournalMode::Wal,
            "off" => JournalMode::Off,
            _ => {
                return Err(Error::invalid_connection_string(format!(
                    "unknown journal mode `{s}`"
                )))
            }
        })
    }
}

#[derive(Default)]
struct Partial {
    location: Option<Location>,
    busy_timeout: Option<Duration>,
    foreign_keys: Option<bool>,
    journal_mode: Option<JournalMode>,
    create_dir: bool,
}

impl Partial {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.to_ascii_lowercase().as_str() {
            "path" => {
                self.location = match value {
                    "" => None,
                    ":memory:" => Some(Location::Memory),
                    path => Some(Location::File(PathBuf::from(path))),
                }
            }
            "busy_timeout" => {
                let millis = value.parse::<u64>().map_err(|_| {
                    Error::invalid_connection_string(format!(
                        "busy_timeout must be a number of milliseconds, found `{value}`"
                    ))
                })?;
                self.busy_timeout = Some(Duration::from_millis(millis));
            }
            "foreign_keys" => self.foreign_keys = Some(parse_bool(key, value)?),
            "journal_mode" => self.journal_mode = Some(value.parse()?),
            "create_dir" => self.create_dir = parse_bool(key, value)?,
            "version" if value == "3" => {}
            "version" => {
                return Err(Error::invalid_connection_string(format!(
                    "only version 3 is supported, found `{value}`"
                )))
            }
            _ => {
                return Err(Error::invalid_connection_string(format!(
                    "unknown key `{key}`"
                )))
            }
        }

        Ok(())
    }

    fn finish(self) -> Result<ConnectionString> {
        let Some(location) = self.location else {
            return Err(Error::invalid_connection_string("missing `path`"));
        };

        Ok(ConnectionString {
            location,
            busy_timeout: self.busy_timeout,
            foreign_keys: self.foreign_keys,
            journal_mode: self.journal_mode,
            create_dir: self.create_dir,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(Error::invalid_connection_string(format!(
            "`{key}` must be a boolean, found `{value}`"
        ))),
    }
}
