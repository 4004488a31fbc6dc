use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_store;
pub mod memory;

#[cfg(feature = "file-storage")]
pub use file_store::FileStore;
pub use memory::MemoryStore;

/// Durable key-value capability the board document is persisted through.
///
/// The session uses it with a single fixed key; failures are surfaced as
/// [`crate::TableroError::StorageError`] and never corrupt the in-memory
/// document.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
