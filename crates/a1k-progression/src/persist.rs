//! JSON helpers over a `Storage`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::storage::{Storage, StorageError};

/// Read and decode the blob under `key`. `Ok(None)` when absent.
pub fn read_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::Decode {
            key: key.to_string(),
            source,
        })
}

/// Encode and write `value` under `key`.
pub fn write_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set(key, &raw)
}

/// Load `key`, falling back to `T::default()` when missing or unreadable.
pub fn load_or_default<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Storage + ?Sized,
{
    match read_json(storage, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            warn!(key, error = %e, "failed to load saved state, using defaults");
            T::default()
        }
    }
}

/// Write `key`, logging instead of failing.
pub fn save_or_warn<T, S>(storage: &S, key: &str, value: &T)
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    if let Err(e) = write_json(storage, key, value) {
        warn!(key, error = %e, "failed to save state");
    }
}
