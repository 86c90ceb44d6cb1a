//! File-backed key-value storage.
//!
//! # Responsibility
//! - Persist each storage key as one UTF-8 file under a data directory.
//!
//! # Invariants
//! - The data directory is created on open, before any read or write.
//! - A missing file reads back as `None`, never as an error.

use super::{validate_key, KeyValueStorage, StorageError, StorageResult};
use log::{error, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Durable storage writing one `<key>.json` file per key.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory if needed.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with status.
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        if let Err(err) = std::fs::create_dir_all(&root) {
            error!(
                "event=storage_open module=storage status=error root={} error={}",
                root.display(),
                err
            );
            return Err(StorageError::Io {
                key: root.display().to_string(),
                source: err,
            });
        }
        info!(
            "event=storage_open module=storage status=ok root={}",
            root.display()
        );
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io {
                key: key.to_string(),
                source: err,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value).map_err(|err| {
            error!(
                "event=storage_write module=storage status=error key={key} error={err}"
            );
            StorageError::Io {
                key: key.to_string(),
                source: err,
            }
        })
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io {
                key: key.to_string(),
                source: err,
            }),
        }
    }
}
