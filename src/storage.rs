//! Thin key/value layer over `localStorage`.
//!
//! Components talk to [`KeyValueStore`] so the rate limiter can run against
//! an in-memory map in tests. Browser reads and writes are not atomic across
//! tabs; callers treat whatever they read as advisory.

use thiserror::Error;
use web_sys::window;

/// `localStorage` key holding the sandbox bearer token.
pub const AUTH_TOKEN_KEY: &str = "cf-auth";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write `{0}` to local storage")]
    Write(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// The browser's `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn read_auth_token<S: KeyValueStore>(store: &S) -> Option<String> {
    store.get(AUTH_TOKEN_KEY).filter(|token| !token.trim().is_empty())
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{KeyValueStore, StorageError};

    /// In-memory store. Clones share the same map.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStorage {
        items: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.items.borrow().len()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.items
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.items.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_state() {
        let store = MemoryStorage::new();
        let other = store.clone();
        store.set("a", "1").unwrap();
        assert_eq!(other.get("a").as_deref(), Some("1"));
        other.remove("a");
        assert_eq!(store.get("a"), None);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn blank_auth_token_reads_as_missing() {
        let store = MemoryStorage::new();
        assert_eq!(read_auth_token(&store), None);
        store.set(AUTH_TOKEN_KEY, "   ").unwrap();
        assert_eq!(read_auth_token(&store), None);
        store.set(AUTH_TOKEN_KEY, "tok_123").unwrap();
        assert_eq!(read_auth_token(&store).as_deref(), Some("tok_123"));
    }
}
