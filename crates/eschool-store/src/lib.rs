//! eSchool Store - Durable help state using native_db
//!
//! Provides a [`Store`] implementing `eschool_core::KeyValueStore`, so the
//! help engine's preferences and seen set outlive the process. Each slot is
//! one row keyed by its full key, which lets several users share a database
//! under different key prefixes.

mod error;
mod models;
mod queries;
mod store;

pub use error::{Error, Result};
pub use models::StoredSetting;
pub use store::Store;
