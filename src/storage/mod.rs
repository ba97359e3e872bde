//! Session storage: a durable string key/value mapping.
//!
//! Keys hold either a user's resolved schedule ref (key = user id) or the
//! transient login-flow keys. The store is the single source of truth; values
//! are never cached in-process.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use anyhow::Result;

use crate::config::{Config, StorageKind};

/// A configured session store backend.
#[derive(Clone)]
pub enum SessionStore {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl SessionStore {
    pub async fn from_config(config: &Config) -> Result<Self> {
        match config.storage_kind {
            StorageKind::Memory => Ok(Self::memory()),
            StorageKind::Sqlite => Ok(Self::Sqlite(
                SqliteStore::connect(&config.database_url).await?,
            )),
        }
    }

    pub fn memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    /// Applies schema migrations where the backend has any.
    pub async fn run_migrations(&self) -> Result<()> {
        if let Self::Sqlite(store) = self {
            store.run_migrations().await?;
        }
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Memory(store) => Ok(store.get(key).await),
            Self::Sqlite(store) => store.get(key).await,
        }
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Memory(store) => {
                store.set(key, value).await;
                Ok(())
            }
            Self::Sqlite(store) => store.set(key, value).await,
        }
    }

    /// Writes several entries together. The login flow relies on this to keep
    /// its three transient keys in step.
    pub async fn set_many(&self, entries: &[(String, String)]) -> Result<()> {
        match self {
            Self::Memory(store) => {
                store.set_many(entries).await;
                Ok(())
            }
            Self::Sqlite(store) => store.set_many(entries).await,
        }
    }

    pub async fn delete(&self, key: &str) -> Result<()> {
        match self {
            Self::Memory(store) => {
                store.delete(key).await;
                Ok(())
            }
            Self::Sqlite(store) => store.delete(key).await,
        }
    }

    pub async fn delete_many(&self, keys: &[String]) -> Result<()> {
        match self {
            Self::Memory(store) => {
                store.delete_many(keys).await;
                Ok(())
            }
            Self::Sqlite(store) => store.delete_many(keys).await,
        }
    }
}
