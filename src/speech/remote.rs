// src/speech/remote.rs

//! HTTP transcription backend
//!
//! Posts recorded audio to a speech-to-text service and reads back the
//! transcript. The blocking client's request timeout is the bounded wait the
//! UI sees; there is no cancellation beyond it.

use crate::speech::{CaptureError, Transcriber};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Expected response body: `{"text": "..."}`
#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    #[serde(default)]
    text: String,
}

/// Transcriber that sends captured audio to a remote recognition endpoint
pub struct RemoteTranscriber {
    endpoint: String,
    audio_path: PathBuf,
    client: reqwest::blocking::Client,
}

impl RemoteTranscriber {
    /// Create a backend posting the audio at `audio_path` to `endpoint`,
    /// waiting at most `timeout` for a transcript
    pub fn new(
        endpoint: impl Into<String>,
        audio_path: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Result<Self, CaptureError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pantry/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CaptureError::Backend(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into(),
            audio_path: audio_path.into(),
            client,
        })
    }
}

impl Transcriber for RemoteTranscriber {
    fn id(&self) -> &str {
        "remote"
    }

    fn capture_text(&self) -> Result<String, CaptureError> {
        let audio = std::fs::read(&self.audio_path).map_err(CaptureError::Audio)?;

        tracing::info!(
            "Transcribing {} ({} bytes) via {}",
            self.audio_path.display(),
            audio.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(audio)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    CaptureError::Timeout
                } else {
                    CaptureError::Backend(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(CaptureError::Backend(format!(
                "endpoint returned {}",
                response.status()
            )));
        }

        let transcript: TranscriptResponse = response
            .json()
            .map_err(|e| CaptureError::Backend(e.to_string()))?;

        let text = transcript.text.trim().to_string();
        if text.is_empty() {
            return Err(CaptureError::Unintelligible);
        }

        tracing::info!("Recognized: {}", text);
        Ok(text)
    }
}
