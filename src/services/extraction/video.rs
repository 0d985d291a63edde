use std::ffi::OsStr;
use std::sync::Arc;

use async_trait::async_trait;

use super::{write_temp_upload, TextExtractor};
use crate::{
    errors::AppResult,
    models::domain::UploadedFile,
    services::{command_executor::CommandExecutor, transcription_service::Transcriber},
};

const EXTRACTED_AUDIO_NAME: &str = "audio.mp3";

/// Pulls the audio track out with ffmpeg, then transcribes it.
pub struct VideoExtractor {
    executor: CommandExecutor,
    ffmpeg_path: String,
    transcriber: Arc<dyn Transcriber>,
}

impl VideoExtractor {
    pub fn new(executor: CommandExecutor, ffmpeg_path: &str, transcriber: Arc<dyn Transcriber>) -> Self {
        Self {
            executor,
            ffmpeg_path: ffmpeg_path.to_string(),
            transcriber,
        }
    }
}

#[async_trait]
impl TextExtractor for VideoExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        // both guards live until transcription returns
        let video = write_temp_upload(file, ".mp4")?;
        let work_dir = tempfile::Builder::new().prefix("mcq-video-").tempdir()?;
        let audio_path = work_dir.path().join(EXTRACTED_AUDIO_NAME);

        let args = [
            OsStr::new("-nostdin"),
            OsStr::new("-y"),
            OsStr::new("-i"),
            video.path().as_os_str(),
            OsStr::new("-vn"),
            OsStr::new("-acodec"),
            OsStr::new("libmp3lame"),
            OsStr::new("-q:a"),
            OsStr::new("4"),
            audio_path.as_os_str(),
        ];
        self.executor.execute(&self.ffmpeg_path, &args).await?;

        let audio = tokio::fs::read(&audio_path).await?;
        log::info!(
            "Extracted {} bytes of audio from '{}'",
            audio.len(),
            file.file_name
        );

        self.transcriber.transcribe(EXTRACTED_AUDIO_NAME, audio).await
    }

    fn name(&self) -> &'static str {
        "ffmpeg+whisper"
    }
}
