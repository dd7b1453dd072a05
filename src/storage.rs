//! Local Persistence
//!
//! Small synchronous key/value abstraction over browser `localStorage`.
//! Last writer wins; there are no transactions.

use crate::error::{AppError, AppResult};

/// Key holding the session token
pub const TOKEN_KEY: &str = "token";
/// Key holding the serialized todo list
pub const TODOS_KEY: &str = "todos";
/// Key holding the first-login date stamp (YYYY-MM-DD)
pub const START_DATE_KEY: &str = "start_date";

/// Synchronous string key/value store
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    /// Read a value; unreadable storage counts as absent
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&self, key: &str) -> AppResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> AppResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = match Self::storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("[STORAGE] read '{}' failed: {}", key, e);
                return None;
            }
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("[STORAGE] read '{}' failed: {:?}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("write '{}' failed: {:?}", key, e)))
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("remove '{}' failed: {:?}", key, e)))
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// In-memory store; clones share the same map, like tabs sharing localStorage
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStore {
        map: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.map.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            self.map.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> AppResult<()> {
            self.map.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[test]
    fn test_memory_store_last_writer_wins() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "a").unwrap();
        other.set("k", "b").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("b"));
        store.remove("k").unwrap();
        assert_eq!(other.get("k"), None);
    }
}
