//! File-backed store: a single JSON object of string values.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::{KeyValueStore, StoreError};

/// Store persisted as one JSON object file, rewritten on every change.
///
/// A change is visible through `get` only after it has reached the file; a
/// failed write leaves both the file and the in-memory view as they were.
///
/// A missing file opens as an empty store. A file that is not a JSON object
/// of strings also opens empty (and is replaced on the next write), matching
/// the way a browser simply starts over with unreadable local storage.
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(source) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %source,
                        "store file is malformed, starting empty"
                    );
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path,
                    source,
                })
            }
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file with `entries` via temp file + rename, so a failed
    /// write leaves the previous contents intact.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Serde {
            path: self.path.clone(),
            source,
        })?;

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|source| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source,
        })?;
        file.write_all(text.as_bytes())
            .map_err(|source| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source,
            })?;
        file.sync_all().map_err(|source| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source,
        })?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|source| StoreError::Io {
            operation: "rename",
            path: self.path.clone(),
            source,
        })
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.flush(&updated)?;
        *entries = updated;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        if !entries.contains_key(key) {
            return Ok(false);
        }
        let mut updated = entries.clone();
        updated.remove(key);
        self.flush(&updated)?;
        *entries = updated;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.get("theme").unwrap().is_none());
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("favorites", "[2,3]").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[2,3]"));
    }

    #[test]
    fn malformed_file_opens_empty_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.get("theme").unwrap().is_none());

        store.set("theme", "light").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn remove_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        assert!(store.remove("theme").unwrap());
        assert!(!store.remove("theme").unwrap());

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get("theme").unwrap().is_none());
    }

    #[test]
    fn unwritable_location_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("missing-dir").join("prefs.json")).unwrap();
        let err = store.set("theme", "dark").unwrap_err();
        assert!(matches!(err, StoreError::Io { operation: "create", .. }));
    }

    #[test]
    fn failed_set_is_not_visible_or_persisted_later() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        let path = nested.join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.set("favorites", "[2]").is_err());
        assert!(store.get("favorites").unwrap().is_none());

        fs::create_dir(&nested).unwrap();
        store.set("theme", "dark").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.get("favorites").unwrap().is_none());
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn failed_remove_keeps_value_in_memory_and_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();

        // A directory at the temp path makes the next flush fail.
        fs::create_dir(store.temp_path()).unwrap();
        assert!(store.remove("theme").is_err());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn flush_replaces_file_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"theme": "light"}"#).unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();

        assert!(!store.temp_path().exists());
        let on_disk: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["theme"], "dark");
    }
}
