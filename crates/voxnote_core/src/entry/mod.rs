//! Note entry form state.
//!
//! # Responsibility
//! - Hold the pending content string across text edits and speech events.
//! - Drive the owned recognition session lifecycle.
//! - Hand non-empty content to the note store on submit.
//!
//! # Invariants
//! - Text and speech capture are mutually exclusive; entering speech mode
//!   requires empty pending content, and the mode returns to text only
//!   through empty content or a submit reset.
//! - Pending content never exceeds `MAX_CONTENT_CHARS`.
//! - A rejected submit leaves both form and store untouched.

use crate::model::note::Note;
use crate::notify::Notification;
use crate::speech::{
    RecognitionBackend, RecognitionConfig, RecognitionSession, SpeechError, TranscriptSegment,
};
use crate::storage::KeyValueStorage;
use crate::store::note_store::{NoteStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound on pending content, matching the entry editor's input cap.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Active capture mode of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    Text,
    Speech,
}

/// Form-layer error for capture and submission.
#[derive(Debug)]
pub enum FormError {
    /// Submit with empty pending content; nothing was created.
    EmptyContent,
    /// Speech start while typed content is pending; clear the text first.
    ContentPending,
    /// Speech capture could not start or stop.
    Speech(SpeechError),
    /// The store accepted the content but failed to persist it.
    Store(StoreError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "cannot save a note without content"),
            Self::ContentPending => {
                write!(f, "remove the current text before recording an audio note")
            }
            Self::Speech(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyContent | Self::ContentPending => None,
            Self::Speech(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<SpeechError> for FormError {
    fn from(value: SpeechError) -> Self {
        Self::Speech(value)
    }
}

impl From<StoreError> for FormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Entry form owning pending content and one recognition session.
pub struct EntryForm<B: RecognitionBackend> {
    session: RecognitionSession<B>,
    content: String,
    mode: CaptureMode,
    onboarding: bool,
}

impl<B: RecognitionBackend> EntryForm<B> {
    /// Creates an empty text-mode form; `locale` is fixed for its lifetime.
    pub fn new(backend: B, locale: impl Into<String>) -> Self {
        Self {
            session: RecognitionSession::new(backend, RecognitionConfig::for_locale(locale)),
            content: String::new(),
            mode: CaptureMode::Text,
            onboarding: true,
        }
    }

    /// Replaces pending content from a text edit.
    ///
    /// Enters text mode, caps the value at [`MAX_CONTENT_CHARS`], and
    /// returns to onboarding when everything was removed.
    pub fn edit_text(&mut self, value: &str) {
        if self.session.is_listening() {
            // Typing takes over; speech stops before text capture resumes.
            let _ = self.session.stop();
        }
        self.mode = CaptureMode::Text;
        self.content = cap_content(value);
        self.onboarding = self.content.is_empty();
    }

    /// Starts speech capture.
    ///
    /// # Errors
    /// - `ContentPending` when typed content is still pending; the mode can
    ///   only switch through empty content.
    /// - `Speech(Unavailable)` when the platform has no recognizer; the form
    ///   state does not change.
    /// - `Speech(AlreadyListening)` on a second start.
    pub fn start_speech(&mut self) -> Result<(), FormError> {
        if !self.session.is_listening() && !self.content.is_empty() {
            return Err(FormError::ContentPending);
        }
        self.session.start()?;
        self.mode = CaptureMode::Speech;
        self.onboarding = false;
        Ok(())
    }

    /// Stops speech capture, keeping the transcript as pending content.
    pub fn stop_speech(&mut self) -> Result<(), FormError> {
        self.session.stop()?;
        Ok(())
    }

    /// Applies one recognition result event.
    ///
    /// The pending content becomes the full recomputed transcript, capped at
    /// [`MAX_CONTENT_CHARS`]. Ignored outside an active speech capture.
    pub fn apply_transcript(&mut self, segments: &[TranscriptSegment]) {
        if self.mode != CaptureMode::Speech || !self.session.is_listening() {
            return;
        }
        let transcript = self.session.on_result(segments).to_string();
        self.content = cap_content(&transcript);
    }

    /// Relays one recognition stream error to the session (log only).
    pub fn on_speech_error(&mut self, message: &str) {
        self.session.on_error(message);
    }

    /// Saves the pending content as a new note.
    ///
    /// On success the form resets (empty content, text mode, onboarding,
    /// active capture stopped) and the created note is returned with its
    /// notification. Empty content is rejected with no state change.
    pub fn submit<S: KeyValueStorage>(
        &mut self,
        store: &mut NoteStore<S>,
    ) -> Result<(Note, Notification), FormError> {
        if self.content.is_empty() {
            info!("event=note_submit module=entry status=rejected reason=empty_content");
            return Err(FormError::EmptyContent);
        }

        let note = store.create(self.content.as_str())?;
        if self.session.is_listening() {
            let _ = self.session.stop();
        }
        self.content.clear();
        self.mode = CaptureMode::Text;
        self.onboarding = true;
        info!("event=note_submit module=entry status=ok id={}", note.id);
        Ok((note, Notification::NoteCreated))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    /// Whether the onboarding hint should show instead of the editor.
    pub fn is_onboarding(&self) -> bool {
        self.onboarding
    }

    pub fn is_listening(&self) -> bool {
        self.session.is_listening()
    }
}

fn cap_content(value: &str) -> String {
    value.chars().take(MAX_CONTENT_CHARS).collect()
}
