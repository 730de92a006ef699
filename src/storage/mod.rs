//! Durable key-value storage behind the session manager.
//!
//! This module provides:
//! - `SessionStore`: the storage boundary the session manager is generic over
//! - `FileStore`: JSON-file-backed store that survives process restarts
//! - `MemoryStore`: in-memory store for tests
//!
//! "Key not found" is never an error here; `get` returns `None` for it.

pub mod file;
pub mod memory;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Asynchronous string-keyed storage consumed by the session manager.
///
/// Implementations are injected generically, which keeps the manager
/// testable against `MemoryStore` instead of the real device store.
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    /// Read the value stored under `key`, or `None` if it was never set
    /// or has been deleted.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Deleting an absent key is a
    /// no-op success.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
