//! File-backed key-value store: one JSON document per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::traits::KeyValueStore;
use crate::error::{LedgerError, Result};
use crate::fs::write_atomic;

const EXTENSION: &str = "json";

/// Stores each key as `<root>/<key>.json`.
///
/// The root directory is created on the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.{}", key, EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LedgerError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.root.display(),
                e
            ))
        })?;
        write_atomic(&path, value.as_bytes()).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), bytes = value.len(), "wrote snapshot");
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(LedgerError::InvalidInput(format!(
            "Invalid storage key: \"{}\"",
            key
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_reads_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("transactions").unwrap(), None);
    }

    #[test]
    fn test_set_creates_root_and_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("budget"));

        store.set("transactions", "[1,2]").unwrap();

        assert!(dir
            .path()
            .join("nested/budget/transactions.json")
            .exists());
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(LedgerError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("transactions", "[]").unwrap();
        store.set("transactions", "[1]").unwrap();
        assert_eq!(store.get("transactions").unwrap().as_deref(), Some("[1]"));
    }
}
