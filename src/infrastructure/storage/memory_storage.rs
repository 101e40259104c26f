// bmark/src/infrastructure/storage/memory_storage.rs
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::storage::KeyValueStorage;

/// In-memory key-value storage, used as the storage double in service tests.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn load(&self, key: &str) -> DomainResult<Option<String>> {
        let slots = self
            .slots
            .read()
            .map_err(|_| DomainError::Storage("Storage lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, text: &str) -> DomainResult<()> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| DomainError::Storage("Storage lock poisoned".to_string()))?;
        slots.insert(key.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_saved_slots_when_load_then_independent_values() {
        let storage = InMemoryStorage::new();

        storage.save("bookmarks", "[]").unwrap();
        storage.save("theme", "dark").unwrap();

        assert_eq!(storage.load("bookmarks").unwrap().as_deref(), Some("[]"));
        assert_eq!(storage.load("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.load("categories").unwrap(), None);
    }
}
