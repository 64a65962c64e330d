// src/speech/mod.rs

//! Speech-to-text input
//!
//! Speech capture is one abstract capability behind the [`Transcriber`]
//! trait, not a set of parallel recognizer integrations. The produced text is
//! treated exactly like typed input: it feeds the same query parsing with no
//! extra validation. A capture failure surfaces as a user-visible message and
//! leaves the query fields untouched.

mod remote;

pub use remote::RemoteTranscriber;

use thiserror::Error;

/// A pluggable speech-to-text backend
///
/// `capture_text` blocks for at most the backend's configured timeout and
/// returns the recognized text. There is no retry policy; the caller reports
/// the failure and moves on.
pub trait Transcriber {
    /// Unique backend identifier (e.g., "remote")
    fn id(&self) -> &str;

    /// Capture and transcribe one utterance
    fn capture_text(&self) -> Result<String, CaptureError>;
}

/// Why a capture attempt produced no text
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The bounded wait elapsed before the backend answered
    #[error("speech capture timed out")]
    Timeout,

    /// The backend answered but recognized nothing
    #[error("could not understand the audio")]
    Unintelligible,

    /// The audio input could not be read
    #[error("failed to read audio input: {0}")]
    Audio(#[source] std::io::Error),

    /// Connectivity or backend failure
    #[error("transcription backend error: {0}")]
    Backend(String),
}
