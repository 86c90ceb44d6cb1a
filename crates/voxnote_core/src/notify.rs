//! User-facing notifications produced by note operations.
//!
//! Modeled as values so any surface (CLI today, a UI later) can render the
//! toast its own way instead of core talking to a widget layer.

/// Visual weight a surface should give a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
}

/// Outcome notification for a user-initiated note operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A note was created from the entry form.
    NoteCreated,
    /// A note was removed from the gallery.
    NoteDeleted,
    /// Submission was rejected because the pending content was empty.
    EmptyNote,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoteCreated => "Note created with success",
            Self::NoteDeleted => "Note deleted",
            Self::EmptyNote => "A note needs some content before saving",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::NoteCreated => Severity::Success,
            Self::NoteDeleted => Severity::Info,
            Self::EmptyNote => Severity::Warning,
        }
    }
}
