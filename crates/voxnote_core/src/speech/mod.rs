//! Speech capture session over a platform recognition backend.
//!
//! # Responsibility
//! - Define the backend contract the platform engine implements.
//! - Own one recognition session with an explicit start/stop lifecycle.
//! - Recompute the pending transcript from the full segment list per event.
//!
//! # Invariants
//! - At most one recognition run is active per session; a second `start`
//!   while listening is rejected instead of racing a shared handle.
//! - Stream errors never change session state; they are logged only.
//! - The transcript is always a full recompute, never an append.

use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration fixed at session construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    /// BCP 47 language tag, e.g. `en-US`. Fixed for the session lifetime.
    pub locale: String,
    /// Keep recognizing across pauses instead of stopping at first result.
    pub continuous: bool,
    /// Deliver interim (non-final) segments as they form.
    pub interim_results: bool,
    /// Number of alternative transcriptions per segment.
    pub max_alternatives: u8,
}

impl RecognitionConfig {
    /// Continuous, interim-enabled, single-alternative capture for `locale`.
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            continuous: true,
            interim_results: true,
            max_alternatives: 1,
        }
    }
}

/// One transcript segment observed so far, final or still interim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Speech capture failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// The platform offers no recognition capability.
    Unavailable,
    /// A recognition run is already active on this session.
    AlreadyListening,
    /// `stop` without a prior `start`.
    NotListening,
    /// Backend refused to start or stop.
    Backend(String),
}

impl Display for SpeechError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "speech recognition is not available on this platform"),
            Self::AlreadyListening => write!(f, "a recognition session is already active"),
            Self::NotListening => write!(f, "no recognition session is active"),
            Self::Backend(message) => write!(f, "recognition backend failure: {message}"),
        }
    }
}

impl Error for SpeechError {}

/// Contract the platform speech engine implements.
///
/// The engine itself (audio capture, model, network) lives behind this seam;
/// core only drives the lifecycle and consumes segment events.
pub trait RecognitionBackend {
    /// Whether the platform offers recognition at all.
    fn is_available(&self) -> bool;
    /// Starts streaming recognition with the given configuration.
    fn begin(&mut self, config: &RecognitionConfig) -> Result<(), SpeechError>;
    /// Stops the active stream. Must be safe to call when not streaming.
    fn end(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Listening,
}

/// One owned recognition session with explicit lifecycle.
pub struct RecognitionSession<B: RecognitionBackend> {
    backend: B,
    config: RecognitionConfig,
    state: SessionState,
    transcript: String,
}

impl<B: RecognitionBackend> RecognitionSession<B> {
    /// Creates an idle session; nothing starts until [`Self::start`].
    pub fn new(backend: B, config: RecognitionConfig) -> Self {
        Self {
            backend,
            config,
            state: SessionState::Idle,
            transcript: String::new(),
        }
    }

    /// Starts recognition.
    ///
    /// # Errors
    /// - `Unavailable` when the platform has no recognition capability.
    /// - `AlreadyListening` when a run is active on this session.
    pub fn start(&mut self) -> Result<(), SpeechError> {
        if !self.backend.is_available() {
            return Err(SpeechError::Unavailable);
        }
        if self.state == SessionState::Listening {
            return Err(SpeechError::AlreadyListening);
        }

        self.backend.begin(&self.config)?;
        self.state = SessionState::Listening;
        self.transcript.clear();
        info!(
            "event=recognition_start module=speech status=ok locale={}",
            self.config.locale
        );
        Ok(())
    }

    /// Stops recognition, keeping the transcript accumulated so far.
    pub fn stop(&mut self) -> Result<(), SpeechError> {
        if self.state != SessionState::Listening {
            return Err(SpeechError::NotListening);
        }
        self.backend.end();
        self.state = SessionState::Idle;
        info!("event=recognition_stop module=speech status=ok");
        Ok(())
    }

    /// Applies one result event carrying every segment observed so far.
    ///
    /// The transcript is replaced by the concatenation of all segments,
    /// interim included. Events arriving while idle are dropped.
    pub fn on_result(&mut self, segments: &[TranscriptSegment]) -> &str {
        if self.state == SessionState::Listening {
            self.transcript = assemble_transcript(segments);
        }
        &self.transcript
    }

    /// Applies one stream error event. Logged only; the session continues.
    pub fn on_error(&mut self, message: &str) {
        error!("event=recognition_error module=speech status=error error={message}");
    }

    pub fn is_listening(&self) -> bool {
        self.state == SessionState::Listening
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn config(&self) -> &RecognitionConfig {
        &self.config
    }
}

/// Concatenates all segments in emission order into one transcript.
pub fn assemble_transcript(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect()
}
