//! Note store over key-value storage.
//!
//! # Responsibility
//! - Load the note sequence once at startup and own it for the session.
//! - Apply create/delete mutations and persist the full sequence after each.
//! - Answer search queries against the in-memory sequence.
//!
//! # Invariants
//! - Sequence order is most-recently-created first; creation prepends.
//! - `create` validates content before any state change.
//! - Absent or unparseable persisted state loads as an empty sequence and is
//!   never surfaced to the caller.

use crate::model::note::{Note, NoteId, NoteValidationError};
use crate::search;
use crate::storage::{KeyValueStorage, StorageError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the JSON-encoded note sequence.
pub const NOTES_STORAGE_KEY: &str = "notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for note mutations.
#[derive(Debug)]
pub enum StoreError {
    /// Creation input violated a note invariant.
    Validation(NoteValidationError),
    /// Persisting the sequence failed.
    Storage(StorageError),
    /// The persisted sequence could not be serialized.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode note sequence: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Owner of the in-memory note sequence, mirrored to one storage key.
pub struct NoteStore<S: KeyValueStorage> {
    storage: S,
    notes: Vec<Note>,
}

impl<S: KeyValueStorage> NoteStore<S> {
    /// Loads prior state from `storage`.
    ///
    /// A missing key, a storage read failure, or malformed JSON all yield an
    /// empty sequence; the condition is logged and intentionally not
    /// surfaced (the user just sees no notes).
    pub fn load(storage: S) -> Self {
        let notes = match storage.get(NOTES_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=malformed error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("event=store_load module=store status=unreadable error={err}");
                Vec::new()
            }
        };
        info!(
            "event=store_load module=store status=ok count={}",
            notes.len()
        );
        Self { storage, notes }
    }

    /// Creates one note from `content`, prepends it and persists.
    ///
    /// Rejects the empty string without touching the sequence. Whitespace-only
    /// content passes; the emptiness check is raw equality by design.
    pub fn create(&mut self, content: impl Into<String>) -> StoreResult<Note> {
        let note = Note::new(content);
        note.validate()?;

        self.notes.insert(0, note.clone());
        if let Err(err) = self.save() {
            // Failed persist: memory must not drift ahead of the mirror.
            self.notes.remove(0);
            return Err(err);
        }

        info!(
            "event=note_create module=store status=ok id={} content_chars={}",
            note.id,
            note.content.chars().count()
        );
        Ok(note)
    }

    /// Removes the note with `id` if present and persists.
    ///
    /// Returns whether a note was actually removed; an absent id is a silent
    /// no-op that leaves storage untouched.
    pub fn delete(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            info!("event=note_delete module=store status=absent id={id}");
            return Ok(false);
        }

        self.save()?;
        info!("event=note_delete module=store status=ok id={id}");
        Ok(true)
    }

    /// Returns the notes matching `query`, most recent first.
    ///
    /// Empty query returns the full sequence unfiltered. Recomputed from
    /// scratch on every call.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        search::filter(&self.notes, query)
    }

    /// Gets one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Current sequence, most recent first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Releases the underlying storage, e.g. to reload a fresh store from it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Serializes the full sequence to the storage key. No deltas.
    fn save(&mut self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.notes).map_err(StoreError::Serialize)?;
        self.storage.set(NOTES_STORAGE_KEY, &encoded)?;
        Ok(())
    }
}
