// Key-value snapshot storage.
//
// The persistence model is deliberately primitive: whole JSON values stored
// under string keys, overwritten in full on every save. Two keys exist in
// practice (the session user record and the player collection). There is no
// schema versioning, no partial update, and no integrity checking.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Storage key for the persisted player collection.
pub const PLAYERS_KEY: &str = "courtside_players";

/// Storage key for the current session's user record.
pub const SESSION_KEY: &str = "courtside_user";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read key {key}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },

    #[error("failed to write key {key}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    #[error("stored value under {key} is not valid JSON: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// SnapshotStore port
// ---------------------------------------------------------------------------

/// The persistence port: load/save/remove whole JSON values by key.
///
/// `load` returns `Ok(None)` when the key has never been written (or was
/// removed); errors are reserved for actual I/O or decode failures.
pub trait SnapshotStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Load and decode a typed value from the store.
pub fn load_typed<T: DeserializeOwned>(
    store: &dyn SnapshotStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    match store.load(key)? {
        Some(value) => {
            let typed = serde_json::from_value(value).map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                source: e,
            })?;
            Ok(Some(typed))
        }
        None => Ok(None),
    }
}

/// Encode and save a typed value to the store.
pub fn save_typed<T: Serialize>(
    store: &dyn SnapshotStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let encoded = serde_json::to_value(value).map_err(|e| StoreError::Encode {
        key: key.to_string(),
        source: e,
    })?;
    store.save(key, &encoded)
}

// ---------------------------------------------------------------------------
// JsonFileStore
// ---------------------------------------------------------------------------

/// File-backed store: one `<key>.json` file per key under a data directory.
///
/// Saves write to a `.tmp` sibling first and rename over the target, so a
/// crash mid-write leaves the previous value intact.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::Write {
            key: dir.display().to_string(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Read {
                    key: key.to_string(),
                    source: e,
                })
            }
        };
        let value = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            source: e,
        })?;
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|e| StoreError::Encode {
            key: key.to_string(),
            source: e,
        })?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let write_err = |e| StoreError::Write {
            key: key.to_string(),
            source: e,
        };
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held. Test helper.
    pub fn len(&self) -> usize {
        self.values.lock().expect("store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let values = self.values.lock().expect("store mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let mut values = self.values.lock().expect("store mutex poisoned");
        values.insert(key.to_string(), value.clone());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().expect("store mutex poisoned");
        values.remove(key);
        Ok(())
    }
}

/// Resolve the default on-disk data directory.
///
/// Prefers the platform data dir (e.g. `~/.local/share/courtside`); falls
/// back to `./data` when no home directory can be determined.
pub fn default_data_dir() -> PathBuf {
    if let Some(dirs) = directories::ProjectDirs::from("", "", "courtside") {
        return dirs.data_dir().to_path_buf();
    }
    Path::new("data").to_path_buf()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load("missing").unwrap().is_none());

        store.save("k", &json!({"a": 1})).unwrap();
        assert_eq!(store.load("k").unwrap(), Some(json!({"a": 1})));

        // Whole-value overwrite
        store.save("k", &json!([1, 2, 3])).unwrap();
        assert_eq!(store.load("k").unwrap(), Some(json!([1, 2, 3])));

        store.remove("k").unwrap();
        assert!(store.load("k").unwrap().is_none());
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("never-written").unwrap();
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemoryStore::new();
        save_typed(&store, "nums", &vec![1u32, 2, 3]).unwrap();
        let back: Option<Vec<u32>> = load_typed(&store, "nums").unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));

        let missing: Option<Vec<u32>> = load_typed(&store, "other").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn typed_load_reports_shape_mismatch() {
        let store = MemoryStore::new();
        store.save("nums", &json!({"not": "a list"})).unwrap();
        let err = load_typed::<Vec<u32>>(&store, "nums").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = std::env::temp_dir().join("courtside_store_round_trip");
        let _ = fs::remove_dir_all(&dir);
        let store = JsonFileStore::open(&dir).unwrap();

        assert!(store.load("session").unwrap().is_none());
        store.save("session", &json!({"user": "admin"})).unwrap();
        assert_eq!(
            store.load("session").unwrap(),
            Some(json!({"user": "admin"}))
        );

        // A fresh handle over the same directory sees the value.
        let reopened = JsonFileStore::open(&dir).unwrap();
        assert_eq!(
            reopened.load("session").unwrap(),
            Some(json!({"user": "admin"}))
        );

        store.remove("session").unwrap();
        assert!(store.load("session").unwrap().is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn file_store_rejects_corrupt_payload() {
        let dir = std::env::temp_dir().join("courtside_store_corrupt");
        let _ = fs::remove_dir_all(&dir);
        let store = JsonFileStore::open(&dir).unwrap();

        fs::write(dir.join("bad.json"), "not json {{{").unwrap();
        let err = store.load("bad").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));

        let _ = fs::remove_dir_all(&dir);
    }
}
