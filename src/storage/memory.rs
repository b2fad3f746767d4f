use super::StorageEngine;
use crate::core::{Key, Value};
use std::collections::HashMap;

/// The authoritative key -> value mapping
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: HashMap<Key, Value>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl StorageEngine for InMemoryStore {
    fn read(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn write(&mut self, key: Key, value: Value) {
        self.entries.insert(key, value);
    }

    fn delete(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }
}
