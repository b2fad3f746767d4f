use crate::core::{Key, Value};

/// Storage engine trait - allows pluggable key-value backends
///
/// Every mutation is applied immediately. Transactions only decide whether a
/// mutation is also recorded, never whether it happens.
pub trait StorageEngine: Send + Sync {
    /// Look up the value stored under `key`
    fn read(&self, key: &str) -> Option<&Value>;

    /// Insert or overwrite `key`
    fn write(&mut self, key: Key, value: Value);

    /// Remove `key`. Returns the previous value, if any.
    fn delete(&mut self, key: &str) -> Option<Value>;
}
