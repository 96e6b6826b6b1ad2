//! Local persistence adapter.
//!
//! Absence of a key, an unreadable value and an undecodable value are all
//! reported as "no saved state" by [`load_json`]; none of them is fatal.

pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod key_value_store;
pub(crate) mod memory_store;

use crate::storage::{
    error::{Result as StorageResult, StorageError},
    key_value_store::KeyValueStore,
};

use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};

/// Durable key holding the authenticated identity.
pub const SESSION_KEY: &str = "user";
/// Durable key holding the standalone profile used while anonymous.
pub const PROFILE_KEY: &str = "userProfile";

/// Reads and decodes `key`.
///
/// Malformed payloads are discarded so the next load starts clean.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No saved state under '{key}'");
            return None;
        }
        Err(e) => {
            warn!("Could not read '{key}', treating as absent: {e}");
            return None;
        }
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Saved state under '{key}' is malformed, discarding: {e}");
            if let Err(discard_err) = store.discard_corrupted(key) {
                warn!("Could not discard malformed '{key}': {discard_err}");
            }
            None
        }
    }
}

/// Encodes `value` and writes it under `key`.
pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::serialization(key, e))?;
    store.set(key, &json)
}
