//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, form and gallery.
//! - Own creation-time validation of note content.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `content` is non-empty at creation time (raw equality check, no trim).
//! - `created_at` is epoch milliseconds UTC, one representation everywhere.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// A user-authored note record.
///
/// Field names in serialized form are the persisted external interface and
/// must not change: `identifier`, `content`, `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable global ID used for deletion and deduplication.
    #[serde(rename = "identifier")]
    pub id: NoteId,
    /// Free-form text, typed or transcribed.
    pub content: String,
    /// Creation instant in epoch milliseconds UTC.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Validation failure for note construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Content equals the empty string.
    EmptyContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content cannot be empty"),
        }
    }
}

impl Error for NoteValidationError {}

impl Note {
    /// Creates a new note with a generated stable ID and current timestamp.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_parts(Uuid::new_v4(), content, Utc::now().timestamp_millis())
    }

    /// Creates a note with caller-provided identity and timestamp.
    ///
    /// Used by load paths where identity already exists in storage.
    pub fn with_parts(id: NoteId, content: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }

    /// Checks creation-time invariants.
    ///
    /// Emptiness is raw equality to `""`; whitespace-only content is
    /// deliberately accepted.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        Ok(())
    }
}
