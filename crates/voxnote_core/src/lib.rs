//! Core domain logic for voxnote.
//! This crate is the single source of truth for note-taking invariants.

pub mod entry;
pub mod gallery;
pub mod logging;
pub mod model;
pub mod notify;
pub mod search;
pub mod speech;
pub mod storage;
pub mod store;

pub use entry::{CaptureMode, EntryForm, FormError, MAX_CONTENT_CHARS};
pub use gallery::{delete_note, relative_label, view, GalleryItem};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, NoteValidationError};
pub use notify::{Notification, Severity};
pub use speech::{
    RecognitionBackend, RecognitionConfig, RecognitionSession, SpeechError, TranscriptSegment,
};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError, StorageResult};
pub use store::note_store::{NoteStore, StoreError, NOTES_STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
