//! Persisted key-value storage boundary.
//!
//! # Responsibility
//! - Abstract the synchronous origin-scoped key-value store notes live in.
//! - Provide file-backed and in-memory implementations.
//!
//! # Invariants
//! - Writes replace the whole value for a key; there are no partial updates.
//! - Keys are restricted to a filesystem-safe character set.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-layer failure.
#[derive(Debug)]
pub enum StorageError {
    /// Key contains characters outside `[A-Za-z0-9._-]`.
    InvalidKey(String),
    /// Underlying filesystem failure for the given key.
    Io {
        key: String,
        source: std::io::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid storage key `{key}`"),
            Self::Io { key, source } => write!(f, "storage io failure for key `{key}`: {source}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Synchronous key-value storage contract.
///
/// Mirrors the shape of a browser-style local store: string keys, string
/// values, blocking calls, no transactions.
pub trait KeyValueStorage {
    /// Reads the value for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes `key` if present; absent keys are not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
