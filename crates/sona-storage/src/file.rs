use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::KeyValueStore;

/// Key-value store backed by one JSON object file on disk. Writes go to a
/// temp file first and are renamed into place, so readers never observe a
/// partial write.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|source| {
            StorageError::Read {
                path: self.path.display().to_string(),
                source,
            }
        })?;
        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(err) => {
                // An unreadable store file is discarded rather than fatal;
                // the next set() writes a fresh one.
                tracing::warn!(path = %self.path.display(), %err, "discarding unparseable store file");
                Ok(BTreeMap::new())
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| StorageError::Write {
                path: dir.display().to_string(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(&map)?;
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes()).map_err(|source| StorageError::Write {
            path: tmp_path.display().to_string(),
            source,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|source| StorageError::Write {
            path: self.path.display().to_string(),
            source,
        })?;

        tracing::debug!(key, path = %self.path.display(), "store updated");
        Ok(())
    }
}
