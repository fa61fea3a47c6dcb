use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::window;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Storage(String),
    #[error("failed to serialize session record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Minimal string key-value store the session record is persisted in.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, SessionError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(SessionError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store. Counts writes so callers can check persistence behaviour.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Number of `set_item` calls so far
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        *self.writes.borrow_mut() += 1;
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_overwrites() {
        let store = MemoryStorage::with_item("k", "old");
        store.set_item("k", "new").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("new"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_memory_storage_missing_key() {
        let store = MemoryStorage::with_item("k", "v");
        assert_eq!(store.get_item("other").unwrap(), None);
        assert_eq!(store.write_count(), 0);
    }
}
