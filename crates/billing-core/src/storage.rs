//! Storage Layer - Key/Value Abstraction
//!
//! Abstract interface over the browser's string key/value storage.
//! Implementations can use localStorage, in-memory, etc.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::DomainResult;

/// String key/value storage with the surface of browser local storage.
///
/// All operations are synchronous: the calculator is single-threaded and
/// treats storage access as fast and non-blocking.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// In-memory storage backend for tests and headless use.
///
/// Clones share the same underlying map, so a reload through a clone sees
/// everything written through the original handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("missing").unwrap(), None);

        storage.set("key", "value").unwrap();
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("value"));

        storage.set("key", "replaced").unwrap();
        assert_eq!(storage.get("key").unwrap().as_deref(), Some("replaced"));
    }
}
