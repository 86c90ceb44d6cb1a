use voxnote_core::{
    CaptureMode, EntryForm, FormError, MemoryStorage, NoteStore, Notification,
    RecognitionBackend, RecognitionConfig, SpeechError, TranscriptSegment, MAX_CONTENT_CHARS,
};

/// Scripted platform backend standing in for the real speech engine.
struct ScriptedBackend {
    available: bool,
}

impl ScriptedBackend {
    fn available() -> Self {
        Self { available: true }
    }

    fn unavailable() -> Self {
        Self { available: false }
    }
}

impl RecognitionBackend for ScriptedBackend {
    fn is_available(&self) -> bool {
        self.available
    }

    fn begin(&mut self, _config: &RecognitionConfig) -> Result<(), SpeechError> {
        Ok(())
    }

    fn end(&mut self) {}
}

#[test]
fn typed_note_submits_and_resets_form() {
    let mut store = NoteStore::load(MemoryStorage::new());
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");

    form.edit_text("Buy milk");
    let (note, notification) = form.submit(&mut store).unwrap();

    assert_eq!(note.content, "Buy milk");
    assert_eq!(notification, Notification::NoteCreated);
    assert_eq!(store.len(), 1);
    assert_eq!(form.content(), "");
    assert_eq!(form.mode(), CaptureMode::Text);
    assert!(form.is_onboarding());
}

#[test]
fn empty_submit_is_rejected_and_store_untouched() {
    let mut store = NoteStore::load(MemoryStorage::new());
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");

    let err = form.submit(&mut store).unwrap_err();
    assert!(matches!(err, FormError::EmptyContent));
    assert!(store.is_empty());
}

#[test]
fn speech_unavailable_is_refused_with_no_state_change() {
    let mut form = EntryForm::new(ScriptedBackend::unavailable(), "en-US");

    let err = form.start_speech().unwrap_err();
    assert!(matches!(err, FormError::Speech(SpeechError::Unavailable)));
    assert_eq!(form.mode(), CaptureMode::Text);
    assert!(form.is_onboarding());
    assert!(!form.is_listening());
}

#[test]
fn speech_start_with_pending_text_is_refused() {
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");
    form.edit_text("typed draft");

    let err = form.start_speech().unwrap_err();
    assert!(matches!(err, FormError::ContentPending));
    assert_eq!(form.mode(), CaptureMode::Text);
    assert_eq!(form.content(), "typed draft");
    assert!(!form.is_listening());

    // Clearing the text re-opens the speech path.
    form.edit_text("");
    form.start_speech().unwrap();
    assert_eq!(form.mode(), CaptureMode::Speech);
}

#[test]
fn second_speech_start_is_guarded() {
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");
    form.start_speech().unwrap();

    let err = form.start_speech().unwrap_err();
    assert!(matches!(
        err,
        FormError::Speech(SpeechError::AlreadyListening)
    ));
    assert!(form.is_listening());
}

#[test]
fn transcript_events_replace_pending_content() {
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");
    form.start_speech().unwrap();
    assert_eq!(form.mode(), CaptureMode::Speech);

    form.apply_transcript(&[TranscriptSegment::interim("buy")]);
    assert_eq!(form.content(), "buy");

    // Each event carries the full segment list; content is recomputed.
    form.apply_transcript(&[
        TranscriptSegment::finalized("buy milk "),
        TranscriptSegment::interim("and bre"),
    ]);
    assert_eq!(form.content(), "buy milk and bre");
}

#[test]
fn transcribed_note_submits_through_store() {
    let mut store = NoteStore::load(MemoryStorage::new());
    let mut form = EntryForm::new(ScriptedBackend::available(), "pt-BR");
    form.start_speech().unwrap();
    form.apply_transcript(&[TranscriptSegment::finalized("comprar leite")]);
    form.stop_speech().unwrap();

    let (note, _) = form.submit(&mut store).unwrap();
    assert_eq!(note.content, "comprar leite");
    assert!(!form.is_listening());
}

#[test]
fn submit_while_listening_stops_the_session() {
    let mut store = NoteStore::load(MemoryStorage::new());
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");
    form.start_speech().unwrap();
    form.apply_transcript(&[TranscriptSegment::finalized("hands free")]);

    form.submit(&mut store).unwrap();
    assert!(!form.is_listening());
    assert_eq!(form.mode(), CaptureMode::Text);
}

#[test]
fn stream_errors_leave_capture_running() {
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");
    form.start_speech().unwrap();
    form.apply_transcript(&[TranscriptSegment::interim("so far")]);

    form.on_speech_error("no-speech");
    assert!(form.is_listening());
    assert_eq!(form.content(), "so far");
}

#[test]
fn typing_takes_over_from_speech() {
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");
    form.start_speech().unwrap();
    form.apply_transcript(&[TranscriptSegment::interim("spoken")]);

    form.edit_text("typed instead");
    assert_eq!(form.mode(), CaptureMode::Text);
    assert!(!form.is_listening());
    assert_eq!(form.content(), "typed instead");
}

#[test]
fn transcript_content_is_capped_like_typed_content() {
    let mut form = EntryForm::new(ScriptedBackend::available(), "en-US");
    form.start_speech().unwrap();

    let long = "a".repeat(MAX_CONTENT_CHARS + 200);
    form.apply_transcript(&[TranscriptSegment::finalized(long)]);
    assert_eq!(form.content().chars().count(), MAX_CONTENT_CHARS);
}
