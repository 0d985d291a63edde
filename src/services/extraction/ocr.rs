use std::ffi::OsStr;

use async_trait::async_trait;

use super::{write_temp_upload, TextExtractor};
use crate::{
    errors::AppResult,
    models::domain::UploadedFile,
    services::command_executor::CommandExecutor,
};

/// OCR through the `tesseract` command-line tool.
pub struct OcrExtractor {
    executor: CommandExecutor,
    tesseract_path: String,
    language: String,
}

impl OcrExtractor {
    pub fn new(executor: CommandExecutor, tesseract_path: &str, language: &str) -> Self {
        Self {
            executor,
            tesseract_path: tesseract_path.to_string(),
            language: language.to_string(),
        }
    }
}

#[async_trait]
impl TextExtractor for OcrExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        let image = write_temp_upload(file, ".png")?;

        let args = [
            image.path().as_os_str(),
            OsStr::new("stdout"),
            OsStr::new("-l"),
            OsStr::new(&self.language),
        ];
        let output = self.executor.execute(&self.tesseract_path, &args).await?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}
