use std::sync::Arc;

use async_trait::async_trait;

use super::{temp_suffix, TextExtractor};
use crate::{
    errors::AppResult,
    models::domain::UploadedFile,
    services::transcription_service::Transcriber,
};

pub struct AudioExtractor {
    transcriber: Arc<dyn Transcriber>,
}

impl AudioExtractor {
    pub fn new(transcriber: Arc<dyn Transcriber>) -> Self {
        Self { transcriber }
    }
}

#[async_trait]
impl TextExtractor for AudioExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        // the backend sniffs the format from the file name
        let file_name = if file.file_name.trim().is_empty() {
            format!("audio{}", temp_suffix(file, ".mp3"))
        } else {
            file.file_name.clone()
        };

        self.transcriber.transcribe(&file_name, file.data.clone()).await
    }

    fn name(&self) -> &'static str {
        "whisper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::AppError, services::transcription_service::MockTranscriber};
    use mockall::predicate::*;

    #[actix_rt::test]
    async fn audio_is_sent_to_transcriber() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .with(eq("lecture.m4a"), eq(vec![1u8, 2, 3]))
            .times(1)
            .returning(|_, _| Ok("photosynthesis converts light".to_string()));

        let extractor = AudioExtractor::new(Arc::new(transcriber));
        let text = extractor
            .extract(&UploadedFile::new("lecture.m4a", vec![1, 2, 3]))
            .await
            .unwrap();

        assert_eq!(text, "photosynthesis converts light");
    }

    #[actix_rt::test]
    async fn unnamed_audio_gets_default_name() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .with(eq("audio.mp3"), always())
            .returning(|_, _| Ok(String::new()));

        let extractor = AudioExtractor::new(Arc::new(transcriber));
        extractor.extract(&UploadedFile::new("", vec![9])).await.unwrap();
    }

    #[actix_rt::test]
    async fn transcriber_errors_propagate() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_, _| Err(AppError::UpstreamError("rate limited".to_string())));

        let extractor = AudioExtractor::new(Arc::new(transcriber));
        let err = extractor
            .extract(&UploadedFile::new("a.wav", vec![1]))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
    }
}
