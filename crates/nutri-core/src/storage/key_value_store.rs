use crate::storage::error::Result as StorageResult;

use std::sync::Arc;

/// Durable string key/value store scoped to one client installation.
///
/// Values are JSON documents. Implementations must make `set` and `remove`
/// visible to a subsequent `get` on the same store before returning.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, `None` if the key was never written or was removed.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Drops a value that could not be decoded.
    ///
    /// Stores that can keep a copy for diagnostics override this.
    fn discard_corrupted(&self, key: &str) -> StorageResult<()> {
        self.remove(key)
    }
}

/// Handle shared by the session manager and the profile store.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Keys are used as file names, so they are limited to a safe alphabet.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(crate::StorageError::invalid_key(key))
    }
}
