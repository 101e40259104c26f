// bmark/src/infrastructure/storage/file_storage.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::storage::KeyValueStorage;

/// File-backed key-value storage: one plain file per key inside the store
/// directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if necessary) the store directory.
    pub fn new<P: AsRef<Path>>(dir: P) -> DomainResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            DomainError::Storage(format!(
                "Failed to create store directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    #[instrument(skip(self), level = "trace")]
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Storage(format!(
                "Failed to read slot '{}': {}",
                key, e
            ))),
        }
    }

    #[instrument(skip(self, text), level = "trace")]
    fn save(&self, key: &str, text: &str) -> DomainResult<()> {
        let path = self.path_for(key);
        fs::write(&path, text).map_err(|e| {
            DomainError::Storage(format!("Failed to write slot '{}': {}", key, e))
        })?;
        debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_absent_key_when_load_then_returns_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        assert_eq!(storage.load("bookmarks").unwrap(), None);
    }

    #[test]
    fn given_saved_text_when_load_then_returns_identical_text() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.save("bookmarks", r#"[{"id":"a1"}]"#).unwrap();

        assert_eq!(
            storage.load("bookmarks").unwrap().as_deref(),
            Some(r#"[{"id":"a1"}]"#)
        );
    }

    #[test]
    fn given_second_save_when_load_then_previous_value_replaced() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.save("theme", "light").unwrap();
        storage.save("theme", "dark").unwrap();

        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn given_missing_store_dir_when_new_then_created() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");

        let storage = FileStorage::new(&nested).unwrap();
        storage.save("categories", "[]").unwrap();

        assert!(nested.join("categories").exists());
    }
}
