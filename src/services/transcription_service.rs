use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Speech-to-text backend used for audio and video uploads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, file_name: &str, audio: Vec<u8>) -> AppResult<String>;
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Whisper served from an OpenAI-compatible `/audio/transcriptions` endpoint.
pub struct WhisperApiTranscriber {
    http: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
}

impl WhisperApiTranscriber {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: transcription_endpoint(&config.groq_api_base),
            api_key: config.groq_api_key.clone(),
            model: config.transcription_model.clone(),
        })
    }
}

pub fn transcription_endpoint(api_base: &str) -> String {
    format!("{}/audio/transcriptions", api_base.trim_end_matches('/'))
}

#[async_trait]
impl Transcriber for WhisperApiTranscriber {
    async fn transcribe(&self, file_name: &str, audio: Vec<u8>) -> AppResult<String> {
        log::info!(
            "Transcribing {} ({} bytes) with {}",
            file_name,
            audio.len(),
            self.model
        );

        let form = Form::new()
            .text("model", self.model.clone())
            .text("response_format", "json")
            .part("file", Part::bytes(audio).file_name(file_name.to_string()));

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Transcription request failed with {}: {}", status, body);
            return Err(AppError::UpstreamError(format!(
                "transcription failed with status {}",
                status
            )));
        }

        let parsed: TranscriptionResponse = response.json().await?;
        Ok(parsed.text)
    }
}
