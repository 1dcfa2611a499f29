use sqlactive::{db, Db};

use tempfile::TempDir;

pub trait Setup {
    fn connect(&self, builder: &mut db::Builder) -> sqlactive::Result<Db>;

    fn setup(&self, mut builder: db::Builder) -> Db {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("sqlactive=debug"),
        )
        .is_test(true)
        .try_init();
        self.connect(&mut builder).unwrap()
    }
}

/// A database file in a fresh temporary directory, removed on drop.
pub struct SetupSqliteFile {
    dir: TempDir,
}

impl SetupSqliteFile {
    pub fn new() -> SetupSqliteFile {
        SetupSqliteFile {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn connection_string(&self) -> String {
        format!(
            "path={};create_dir=true;busy_timeout=5000",
            self.dir.path().join("data").join("test.db").display()
        )
    }
}

impl Default for SetupSqliteFile {
    fn default() -> Self {
        SetupSqliteFile::new()
    }
}

impl Setup for SetupSqliteFile {
    fn connect(&self, builder: &mut db::Builder) -> sqlactive::Result<Db> {
        builder.connect(&self.connection_string())
    }
}

pub struct SetupSqliteMemory;

impl Setup for SetupSqliteMemory {
    fn connect(&self, builder: &mut db::Builder) -> sqlactive::Result<Db> {
        builder.connect("sqlite::memory:")
    }
}
