//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::*;
use eschool_core::KeyValueStore;
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models
        .define::<StoredSetting>()
        .expect("StoredSetting model definition is valid");
    models
});

/// Database store for persisted help state.
pub struct Store {
    pub(crate) db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let db = Builder::new()
            .create(&MODELS, path)
            .map_err(|e| Error::Database(e.to_string()))?;
        debug!(path = %path.display(), "opened help store");
        Ok(Self { db })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Load a slot value.
    pub fn load(&self, key: &str) -> Result<Option<String>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredSetting> = r.get().primary(key.to_string())?;
        Ok(stored.map(|s| s.value))
    }

    /// Save a slot value.
    pub fn save(&self, key: &str, value: &str) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(StoredSetting::new(key, value))?;
        rw.commit()?;
        Ok(())
    }

    /// Delete a slot.
    pub fn delete(&self, key: &str) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredSetting> = rw.get().primary(key.to_string())?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(())
    }

    /// Load all slots.
    pub fn load_all(&self) -> Result<Vec<StoredSetting>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<StoredSetting>()?;
        let iter = scan.all()?;
        let settings: std::result::Result<Vec<StoredSetting>, _> = iter.collect();
        settings.map_err(|e| Error::Database(e.to_string()))
    }

    /// Clear all data.
    pub fn clear(&self) -> Result<()> {
        let settings = self.load_all()?;

        let rw = self.db.rw_transaction()?;
        for setting in settings {
            rw.remove(setting)?;
        }
        rw.commit()?;
        Ok(())
    }
}

impl KeyValueStore for Store {
    fn get(&self, key: &str) -> eschool_core::Result<Option<String>> {
        Ok(self.load(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> eschool_core::Result<()> {
        Ok(self.save(key, value)?)
    }

    fn remove(&mut self, key: &str) -> eschool_core::Result<()> {
        Ok(self.delete(key)?)
    }
}
