//! JSON file-based key-value backend.
//!
//! Keeps every entry in memory and rewrites the whole file on each `set`,
//! using atomic file writes (write-to-temp + rename) so a crash never leaves a
//! half-written file behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the file is loaded once on open
//! - **Write**: O(n) - serializes and writes the entire map
//! - **Best for**: a handful of small preference entries

use crate::domain::error::{Result, ShowcaseError};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "theme": "dark",
///     "themeConfig_dark": "{\"primaryColor\":\"210 40% 98%\", ...}"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// # Examples
///
/// ```no_run
/// use showcase::storage::{JsonFileStore, KeyValueStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonFileStore::open(PathBuf::from("/tmp/showcase/state.json"))?;
/// store.set("language", "fr")?;
/// # Ok::<(), showcase::ShowcaseError>(())
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    data: StorageData,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories.
    ///
    /// A missing file starts an empty store. A file that exists but does not
    /// parse is logged and treated as empty; it is replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read (including content that is not UTF-8). The
    /// file is left untouched in that case.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            match Self::load_from_file(&file_path) {
                Ok(data) => data,
                Err(e @ ShowcaseError::MalformedPersistedState { .. }) => {
                    tracing::warn!(path = ?file_path, error = %e, "discarding malformed store file");
                    StorageData::default()
                }
                Err(e) => return Err(e),
            }
        } else {
            StorageData::default()
        };

        tracing::debug!(entries = data.entries.len(), "JSON store ready");

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents).map_err(|e| {
            ShowcaseError::MalformedPersistedState {
                key: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        if data.version != FORMAT_VERSION {
            tracing::debug!(version = data.version, "loading store written by another format version");
        }

        Ok(data)
    }

    /// Writes `data` to disk via a temporary sibling file and a rename.
    fn save_to_file(&self, data: &StorageData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| ShowcaseError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key).entered();

        let mut next = self.data.clone();
        next.version = FORMAT_VERSION;
        next.entries.insert(key.to_string(), value.to_string());

        self.save_to_file(&next)?;
        self.data = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        {
            let mut store = JsonFileStore::open(path.clone()).unwrap();
            store.set("theme", "dark").unwrap();
            store.set("language", "vi").unwrap();
        }

        let store = JsonFileStore::open(path).unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("language").unwrap().as_deref(), Some("vi"));
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);

        store.set("theme", "light").unwrap();
        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("k", "v").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            JsonFileStore::open(dir.path().to_path_buf()),
            Err(ShowcaseError::Io(_))
        ));

        let path = dir.path().join("state.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(JsonFileStore::open(path.clone()), Err(ShowcaseError::Io(_))));
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00]);
    }
}
