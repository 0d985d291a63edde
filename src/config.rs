use std::env;
use std::time::Duration;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub groq_api_key: SecretString,
    pub groq_api_base: String,
    pub completion_model: String,
    pub transcription_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub max_upload_bytes: usize,
    pub tesseract_path: String,
    pub ocr_language: String,
    pub ffmpeg_path: String,
    pub command_timeout_secs: u64,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            groq_api_key: SecretString::from(env::var("GROQ_API_KEY").unwrap_or_default()),
            groq_api_base: env::var("GROQ_API_BASE")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            transcription_model: env::var("TRANSCRIPTION_MODEL")
                .unwrap_or_else(|_| "whisper-large-v3".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|b| b.parse().ok())
                .unwrap_or(25 * 1024 * 1024),
            tesseract_path: env::var("TESSERACT_PATH")
                .unwrap_or_else(|_| "tesseract".to_string()),
            ocr_language: env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            command_timeout_secs: env::var("COMMAND_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
        }
    }

    /// Logs a warning for settings that will only fail once a request reaches
    /// the upstream API. Nothing is rejected here.
    pub fn warn_if_unconfigured(&self) {
        use secrecy::ExposeSecret;

        if self.groq_api_key.expose_secret().trim().is_empty() {
            log::warn!(
                "GROQ_API_KEY is not set; completion and transcription requests will fail authentication"
            );
        }
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            groq_api_key: SecretString::from("test_api_key".to_string()),
            groq_api_base: "http://127.0.0.1:9/v1".to_string(),
            completion_model: "test-model".to_string(),
            transcription_model: "test-whisper".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            max_upload_bytes: 1024 * 1024,
            tesseract_path: "tesseract".to_string(),
            ocr_language: "eng".to_string(),
            ffmpeg_path: "ffmpeg".to_string(),
            command_timeout_secs: 5,
            http_timeout_secs: 5,
        }
    }
}
