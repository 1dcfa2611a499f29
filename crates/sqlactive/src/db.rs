mod builder;
pub use builder::Builder;

use crate::{stmt::Expr, Model, Result};

use sqlactive_core::{
    codec, driver::Row, err, schema, stmt::Value, Connection, Driver, Error, Storage,
};
use sqlactive_sql::{Compiler, Serializer, Statement};

use std::{
    any::{type_name, TypeId},
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Handle to one database.
///
/// Every operation opens its own connection, runs while holding the statement
/// lock, and closes the connection before returning. Cloning a `Db` is cheap
/// and clones share the lock and the descriptor cache.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    driver: Arc<dyn Driver>,

    /// Serializes statement execution. Engines built with the same lock never
    /// overlap statements.
    lock: Arc<Mutex<()>>,

    /// Model descriptors, built on registration or first use.
    models: Mutex<HashMap<TypeId, Arc<schema::Model>>>,

    config: Config,
}

#[derive(Debug, Clone, Copy)]
struct Config {
    inline_literals: bool,
    atomic_batches: bool,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.shared.driver
    }

    /// Returns the descriptor for `M`, building and caching it on first use.
    pub fn schema<M: Model>(&self) -> Result<Arc<schema::Model>> {
        let mut models = self
            .shared
            .models
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(model) = models.get(&TypeId::of::<M>()) {
            return Ok(model.clone());
        }

        let model = Arc::new(build_schema::<M>()?);
        models.insert(TypeId::of::<M>(), model.clone());
        Ok(model)
    }

    pub fn create_table<M: Model>(&self) -> Result<()> {
        let schema = self.schema::<M>()?;
        let stmt = Statement::create_table(&schema)?;
        self.execute(&stmt).map(|_| ())
    }

    pub fn drop_table<M: Model>(&self) -> Result<()> {
        let schema = self.schema::<M>()?;
        self.execute(&Statement::drop_table(&schema)).map(|_| ())
    }

    pub fn drop_table_if_exists<M: Model>(&self) -> Result<()> {
        let schema = self.schema::<M>()?;
        self.execute(&Statement::drop_table_if_exists(&schema))
            .map(|_| ())
    }

    /// Inserts one row and returns the row id the store assigned to it.
    pub fn insert<M: Model>(&self, model: &M) -> Result<i64> {
        let schema = self.schema::<M>()?;
        let stmt = Statement::insert(&schema, &model.record())?;

        let _lock = self.lock();
        let mut connection = self.shared.driver.connect()?;
        self.exec_returning_id(&mut *connection, &stmt)
    }

    /// Inserts rows one at a time, in order, stopping at the first failure.
    ///
    /// With atomic batches (the default) the rows are inserted in a single
    /// transaction, every record is validated before the first insert, and a
    /// failure leaves the table unchanged. Otherwise each record is validated
    /// just before its own insert and the rows inserted before the failure
    /// stay committed.
    pub fn insert_many<M: Model>(&self, models: &[M]) -> Result<Vec<i64>> {
        if models.is_empty() {
            return Err(Error::invalid_model(
                type_name::<M>(),
                "insert_many requires at least one record",
            ));
        }

        let schema = self.schema::<M>()?;

        if !self.shared.config.atomic_batches {
            let _lock = self.lock();
            let mut connection = self.shared.driver.connect()?;

            return models
                .iter()
                .map(|model| {
                    let stmt = Statement::insert(&schema, &model.record())?;
                    self.exec_returning_id(&mut *connection, &stmt)
                })
                .collect();
        }

        let stmts = models
            .iter()
            .map(|model| Statement::insert(&schema, &model.record()))
            .collect::<Result<Vec<_>>>()?;

        let _lock = self.lock();
        let mut connection = self.shared.driver.connect()?;

        connection.begin()?;

        let ids = stmts
            .iter()
            .map(|stmt| self.exec_returning_id(&mut *connection, stmt))
            .collect::<Result<Vec<_>>>();

        match ids {
            Ok(ids) => {
                connection.commit()?;
                Ok(ids)
            }
            Err(err) => {
                if let Err(rollback) = connection.rollback() {
                    tracing::warn!(error = %rollback, "failed to roll back batch insert");
                }
                Err(err)
            }
        }
    }

    /// Updates the row matching the model's primary key. Returns `false` if
    /// no row matched.
    pub fn update<M: Model>(&self, model: &M) -> Result<bool> {
        let schema = self.schema::<M>()?;
        let stmt = Statement::update(&schema, &model.record())?;
        Ok(self.execute(&stmt)? > 0)
    }

    /// Deletes the row matching the model's primary key. Returns `false` if no
    /// row matched.
    pub fn delete<M: Model>(&self, model: &M) -> Result<bool> {
        let schema = self.schema::<M>()?;
        let stmt = Statement::delete(&schema, &model.record())?;
        Ok(self.execute(&stmt)? > 0)
    }

    pub fn select_all<M: Model>(&self) -> Result<Vec<M>> {
        let schema = self.schema::<M>()?;
        self.select(&schema, &Statement::select_all(&schema))
    }

    pub fn select_where<M: Model>(&self, filter: Expr<bool>) -> Result<Vec<M>> {
        let schema = self.schema::<M>()?;
        let stmt = self.compile(&schema, &filter)?;
        self.select(&schema, &stmt)
    }

    /// Returns the first row matching `filter`, if any.
    pub fn first_where<M: Model>(&self, filter: Expr<bool>) -> Result<Option<M>> {
        Ok(self.select_where(filter)?.into_iter().next())
    }

    /// Builds the statement `select_where` would run, without running it.
    pub fn select_statement<M: Model>(&self, filter: Expr<bool>) -> Result<Statement> {
        let schema = self.schema::<M>()?;
        self.compile(&schema, &filter)
    }

    fn compile(&self, schema: &schema::Model, filter: &Expr<bool>) -> Result<Statement> {
        let predicate = Compiler::new(schema)
            .inline_literals(self.shared.config.inline_literals)
            .compile(&filter.untyped)?;
        Ok(Statement::select_where(schema, predicate))
    }

    fn select<M: Model>(&self, schema: &schema::Model, stmt: &Statement) -> Result<Vec<M>> {
        let (sql, params) = render(stmt)?;

        let rows = {
            let _lock = self.lock();
            let mut connection = self.shared.driver.connect()?;
            connection.query(&sql, &params)?
        };

        rows.into_iter()
            .map(|row| materialize::<M>(schema, row))
            .collect()
    }

    fn execute(&self, stmt: &Statement) -> Result<u64> {
        let (sql, params) = render(stmt)?;

        let _lock = self.lock();
        let mut connection = self.shared.driver.connect()?;
        connection.execute(&sql, &params)
    }

    fn exec_returning_id(&self, connection: &mut dyn Connection, stmt: &Statement) -> Result<i64> {
        let (sql, params) = render(stmt)?;
        connection.execute_returning_id(&sql, &params)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock has nothing to repair.
        self.shared
            .lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn build_schema<M: Model>() -> Result<schema::Model> {
    let model = M::schema()
        .build()
        .map_err(|err| err.context(err!("building descriptor for `{}`", type_name::<M>())))?;

    tracing::debug!(
        model = %model.name,
        table = %model.table,
        columns = model.columns.len(),
        "cached model descriptor"
    );

    Ok(model)
}

/// Serializes a statement and converts its parameters to storage values.
fn render(stmt: &Statement) -> Result<(String, Vec<Storage>)> {
    let mut params: Vec<Value> = vec![];
    let sql = Serializer::new().serialize(stmt, &mut params);

    tracing::debug!(
        table = stmt.table(),
        sql = %Framed(stmt),
        params = params.len(),
        "executing statement"
    );

    let params = params
        .iter()
        .map(Storage::from_value)
        .collect::<Result<Vec<_>>>()?;

    Ok((sql, params))
}

/// Displays a statement wrapped in transaction markers. Rendered only when the
/// log line is written.
struct Framed<'a>(&'a Statement);

impl fmt::Display for Framed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut params: Vec<Value> = vec![];
        f.write_str(&Serializer::new().framed(true).serialize(self.0, &mut params))
    }
}

/// Builds a model instance from a row, converting each stored column back to
/// its field type. Ignored fields keep their default value.
fn materialize<M: Model>(schema: &schema::Model, mut row: Row) -> Result<M> {
    let mut instance = M::default();

    for column in schema.stored_columns() {
        let raw = row.take(&column.name).ok_or_else(|| {
            err!(
                "column `{}` of table `{}` is missing from the result row",
                column.name,
                schema.table
            )
        })?;

        let value = codec::from_storage(raw, &column.ty).map_err(|err| {
            err.context(err!(
                "reading column `{}` of table `{}`",
                column.name,
                schema.table
            ))
        })?;

        instance.load(column, value)?;
    }

    Ok(instance)
}
