use std::sync::Arc;

use super::StoreError;

/// String key-value persistence, one value per key (latest write wins).
///
/// Writes are synchronous: once `set` or `remove` returns `Ok`, the change is
/// durable for the lifetime the implementation promises.
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store (or overwrite) the value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value under `key`. Returns true if one existed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        (**self).remove(key)
    }
}
