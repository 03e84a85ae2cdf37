use std::path::PathBuf;

use anyhow::Result;

use crate::infra::sqlite::queries::{load_slot, upsert_slot};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::storage::{KeyValueStore, StorageError};

pub struct SqliteStore {
    pub db_path: PathBuf,
}

impl SqliteStore {
    pub fn open(db_path: PathBuf) -> Result<Self> {
        init_db(&db_path)?;
        Ok(Self { db_path })
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        load_slot(&self.db_path, key).map_err(|err| StorageError::Message(format!("{err:#}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        upsert_slot(&self.db_path, key, value)
            .map_err(|err| StorageError::Message(format!("{err:#}")))
    }
}
