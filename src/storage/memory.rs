use crate::error::Result;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory key-value store.
///
/// Clones share the same map, so a test can hand one clone to a session and
/// inspect what it persisted through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("key", "value").await.unwrap();
        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("value"));

        store.set("key", "replaced").await.unwrap();
        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("replaced"));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("key", "value").await.unwrap();
        assert_eq!(other.get("key").await.unwrap().as_deref(), Some("value"));
    }
}
