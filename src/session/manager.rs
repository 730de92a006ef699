use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::storage::{SessionStore, StorageError};

/// Fixed key the session token is stored under. One session per device.
const SESSION_KEY: &str = "userToken";

/// Length of issued tokens.
/// 16 alphanumeric characters is plenty for practical collision avoidance.
const TOKEN_LENGTH: usize = 16;

/// Issues, persists, retrieves, and clears the single device session token.
///
/// The manager is generic over its store so callers can inject `FileStore`
/// for the real device and `MemoryStore` in tests. It holds no state of its
/// own; absence of a stored token is the valid "logged out" state.
pub struct SessionManager<S> {
    store: S,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Produce a new opaque session token.
    ///
    /// Tokens are random but NOT cryptographically unpredictable; nothing
    /// validates them, so nothing may rely on them being unguessable.
    pub fn issue(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Persist `token`, overwriting any previously stored token.
    pub async fn save(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(SESSION_KEY, token).await
    }

    /// Read the current token, or `None` if no session is stored.
    pub async fn load(&self) -> Result<Option<String>, StorageError> {
        self.store.get(SESSION_KEY).await
    }

    /// Remove the stored token. Clearing when no session exists succeeds.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.delete(SESSION_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn manager() -> SessionManager<MemoryStore> {
        SessionManager::new(MemoryStore::new())
    }

    #[test]
    fn test_issue_returns_distinct_tokens() {
        let manager = manager();
        assert_ne!(manager.issue(), manager.issue());
    }

    #[test]
    fn test_issued_tokens_are_opaque_alphanumeric_strings() {
        let token = manager().issue();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn test_load_before_any_save_returns_none() {
        let manager = manager();
        assert_eq!(manager.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let manager = manager();
        manager.save("tok-1").await.unwrap();
        assert_eq!(manager.load().await.unwrap(), Some("tok-1".to_string()));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_token() {
        let manager = manager();
        manager.save("first").await.unwrap();
        manager.save("second").await.unwrap();
        assert_eq!(manager.load().await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_clear_then_load_returns_none() {
        let manager = manager();
        manager.save("tok").await.unwrap();
        manager.clear().await.unwrap();
        assert_eq!(manager.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let manager = manager();
        manager.save("tok").await.unwrap();
        manager.clear().await.unwrap();
        // Second clear hits an absent key and must still succeed
        manager.clear().await.unwrap();
        assert_eq!(manager.load().await.unwrap(), None);
    }
}
