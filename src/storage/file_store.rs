use crate::error::Result;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based key-value store, one JSON document per key
pub struct FileStore {
    root_path: PathBuf,
}

impl FileStore {
    const TABLERO_DIR: &'static str = ".tablero";

    /// Creates a new FileStore rooted at the given project directory
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::TABLERO_DIR),
        }
    }

    fn key_file(&self, key: &str) -> PathBuf {
        self.root_path.join(format!("{key}.json"))
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.key_file(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&file_path).await?;
        Ok(Some(contents))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_directory_exists().await?;
        fs::write(self.key_file(key), value).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_absent_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert_eq!(store.get("board").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.set("board", r#"{"title":"T","lists":[]}"#).await.unwrap();

        assert!(temp_dir.path().join(".tablero").join("board.json").exists());
        assert_eq!(
            store.get("board").await.unwrap().as_deref(),
            Some(r#"{"title":"T","lists":[]}"#)
        );
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.set("board", "first").await.unwrap();
        store.set("board", "second").await.unwrap();

        assert_eq!(store.get("board").await.unwrap().as_deref(), Some("second"));
    }
}
