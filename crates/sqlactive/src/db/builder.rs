use super::{build_schema, Config, Db, Shared};
use crate::{schema, Model, Result};

use sqlactive_core::Driver;

use std::{
    any::TypeId,
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

pub struct Builder {
    /// Descriptor constructors for the registered models, run by `build` so a
    /// bad model fails before any statement is sent.
    models: Vec<(TypeId, fn() -> Result<schema::Model>)>,

    lock: Option<Arc<Mutex<()>>>,

    config: Config,
}

impl Builder {
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.models.push((TypeId::of::<M>(), build_schema::<M>));
        self
    }

    /// Write bool, number, and string literals of `select_where` filters into
    /// the SQL text instead of binding them. Enabled by default.
    pub fn inline_literals(&mut self, inline_literals: bool) -> &mut Self {
        self.config.inline_literals = inline_literals;
        self
    }

    /// Run `insert_many` inside a transaction. Enabled by default.
    pub fn atomic_batches(&mut self, atomic_batches: bool) -> &mut Self {
        self.config.atomic_batches = atomic_batches;
        self
    }

    /// Share a statement lock with other engines. By default each engine gets
    /// its own.
    pub fn lock(&mut self, lock: Arc<Mutex<()>>) -> &mut Self {
        self.lock = Some(lock);
        self
    }

    /// Connects using one of the enabled drivers.
    ///
    /// With the `sqlite` feature, accepts `path=<file>;key=value` connection
    /// strings and `sqlite:` URLs.
    pub fn connect(&mut self, url: &str) -> Result<Db> {
        #[cfg(feature = "sqlite")]
        {
            self.build(sqlactive_driver_sqlite::Sqlite::new(url)?)
        }

        #[cfg(not(feature = "sqlite"))]
        {
            Err(sqlactive_core::Error::invalid_connection_string(format!(
                "no driver is enabled for `{url}`"
            )))
        }
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let mut models = HashMap::new();

        for (id, build) in &self.models {
            models.insert(*id, Arc::new(build()?));
        }

        tracing::debug!(url = driver.url(), models = models.len(), "built db");

        Ok(Db {
            shared: Arc::new(Shared {
                driver: Arc::new(driver),
                lock: self.lock.clone().unwrap_or_default(),
                models: Mutex::new(models),
                config: self.config,
            }),
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            models: vec![],
            lock: None,
            config: Config {
                inline_literals: true,
                atomic_batches: true,
            },
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("models", &self.models.len())
            .field("config", &self.config)
            .finish()
    }
}
