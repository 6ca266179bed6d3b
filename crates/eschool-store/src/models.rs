//! Database models for persistent storage.

use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// One persisted slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct StoredSetting {
    /// Primary key - full slot key, prefix included.
    #[primary_key]
    pub key: String,
    /// Raw slot value.
    pub value: String,
}

impl StoredSetting {
    /// Create a row for a slot.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
