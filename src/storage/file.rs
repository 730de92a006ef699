use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use super::{SessionStore, StorageError};

/// Durable store backed by a single JSON file of key/value pairs.
///
/// The file is small (one session key in practice), so each operation
/// reads and rewrites it whole. A missing file is an empty store.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_entries(&self) -> Result<HashMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_entries(
        &self,
        entries: &HashMap<String, String>,
    ) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;
        debug!(path = %self.path.display(), key, "stored value");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
            debug!(path = %self.path.display(), key, "deleted value");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().join("store.json"))
    }

    #[tokio::test]
    async fn test_get_on_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.get("userToken").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("userToken", "abc123").await.unwrap();
        assert_eq!(
            store.get("userToken").await.unwrap(),
            Some("abc123".to_string())
        );
    }

    #[tokio::test]
    async fn test_value_survives_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = FileStore::new(path.clone());
        store.set("userToken", "persisted").await.unwrap();
        drop(store);

        let reopened = FileStore::new(path);
        assert_eq!(
            reopened.get("userToken").await.unwrap(),
            Some("persisted".to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.delete("userToken").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("userToken", "t").await.unwrap();
        store.set("other", "kept").await.unwrap();

        store.delete("userToken").await.unwrap();

        assert_eq!(store.get("userToken").await.unwrap(), None);
        assert_eq!(store.get("other").await.unwrap(), Some("kept".to_string()));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(path);
        let err = store.get("userToken").await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
