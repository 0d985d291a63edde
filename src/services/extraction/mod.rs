//! Text extraction for each uploadable source kind.
//!
//! Every extractor implements [`TextExtractor`]; the [`ExtractorRegistry`]
//! maps a [`SourceKind`] to the extractor that handles it. Extractors return
//! the raw text; trimming and truncation happen later in the pipeline.

mod audio;
mod docx;
mod ocr;
mod pdf;
mod text;
mod video;

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tempfile::NamedTempFile;

pub use audio::AudioExtractor;
pub use docx::{parse_document_xml, DocxExtractor};
pub use ocr::OcrExtractor;
pub use pdf::PdfExtractor;
pub use text::{decode_text, PlainTextExtractor};
pub use video::VideoExtractor;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{SourceKind, UploadedFile},
    services::{command_executor::CommandExecutor, transcription_service::Transcriber},
};

static SAFE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.[a-z0-9]{1,8}$").expect("SAFE_SUFFIX is a valid regex pattern"));

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<SourceKind, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extractor(mut self, kind: SourceKind, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractors.insert(kind, extractor);
        self
    }

    /// Registers the standard extractor for every file kind.
    pub fn from_config(config: &Config, transcriber: Arc<dyn Transcriber>) -> Self {
        let executor = CommandExecutor::new(config.command_timeout());

        Self::new()
            .with_extractor(SourceKind::Text, Arc::new(PlainTextExtractor))
            .with_extractor(SourceKind::Pdf, Arc::new(PdfExtractor))
            .with_extractor(SourceKind::Docx, Arc::new(DocxExtractor))
            .with_extractor(
                SourceKind::Image,
                Arc::new(OcrExtractor::new(
                    executor.clone(),
                    &config.tesseract_path,
                    &config.ocr_language,
                )),
            )
            .with_extractor(
                SourceKind::Audio,
                Arc::new(AudioExtractor::new(Arc::clone(&transcriber))),
            )
            .with_extractor(
                SourceKind::Video,
                Arc::new(VideoExtractor::new(executor, &config.ffmpeg_path, transcriber)),
            )
    }

    pub fn supports(&self, kind: SourceKind) -> bool {
        self.extractors.contains_key(&kind)
    }

    pub async fn extract(&self, kind: SourceKind, file: &UploadedFile) -> AppResult<String> {
        let extractor = self.extractors.get(&kind).ok_or_else(|| {
            AppError::InternalError(format!("no extractor registered for {}", kind.label()))
        })?;

        log::info!(
            "Extracting text from {} '{}' ({} bytes, {}) with {}",
            kind.label(),
            file.file_name,
            file.data.len(),
            file.content_type.as_deref().unwrap_or("unknown type"),
            extractor.name()
        );

        extractor.extract(file).await
    }
}

/// Temp-file suffix for an upload, falling back to `default` for missing or
/// unusual extensions.
pub(crate) fn temp_suffix(file: &UploadedFile, default: &str) -> String {
    file.extension()
        .filter(|ext| SAFE_SUFFIX.is_match(ext))
        .unwrap_or_else(|| default.to_string())
}

/// Writes the upload to a temporary file that is removed when dropped.
pub(crate) fn write_temp_upload(file: &UploadedFile, default_suffix: &str) -> AppResult<NamedTempFile> {
    let mut temp = tempfile::Builder::new()
        .prefix("mcq-upload-")
        .suffix(&temp_suffix(file, default_suffix))
        .tempfile()?;
    temp.write_all(&file.data)?;
    temp.flush()?;
    Ok(temp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transcription_service::MockTranscriber;

    struct FixedExtractor(&'static str);

    #[async_trait]
    impl TextExtractor for FixedExtractor {
        async fn extract(&self, _file: &UploadedFile) -> AppResult<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[actix_rt::test]
    async fn registry_dispatches_by_kind() {
        let registry = ExtractorRegistry::new()
            .with_extractor(SourceKind::Pdf, Arc::new(FixedExtractor("from pdf")))
            .with_extractor(SourceKind::Docx, Arc::new(FixedExtractor("from docx")));

        let file = UploadedFile::new("x", vec![1]);
        assert_eq!(registry.extract(SourceKind::Docx, &file).await.unwrap(), "from docx");
        assert_eq!(registry.extract(SourceKind::Pdf, &file).await.unwrap(), "from pdf");
    }

    #[actix_rt::test]
    async fn registry_without_extractor_is_internal_error() {
        let registry = ExtractorRegistry::new();
        let err = registry
            .extract(SourceKind::Image, &UploadedFile::new("a.png", vec![1]))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn from_config_covers_every_file_kind() {
        let registry =
            ExtractorRegistry::from_config(&Config::test_config(), Arc::new(MockTranscriber::new()));

        for kind in SourceKind::FILE_PRIORITY {
            assert!(registry.supports(kind), "missing extractor for {:?}", kind);
        }
        assert!(!registry.supports(SourceKind::Topic));
    }

    #[test]
    fn temp_suffix_rejects_odd_extensions() {
        assert_eq!(temp_suffix(&UploadedFile::new("scan.PNG", vec![1]), ".img"), ".png");
        assert_eq!(temp_suffix(&UploadedFile::new("noext", vec![1]), ".img"), ".img");
        assert_eq!(
            temp_suffix(&UploadedFile::new("evil.p n g", vec![1]), ".img"),
            ".img"
        );
    }

    #[test]
    fn temp_upload_is_removed_on_drop() {
        let file = UploadedFile::new("clip.mp4", b"not really a video".to_vec());
        let temp = write_temp_upload(&file, ".bin").unwrap();
        let path = temp.path().to_path_buf();

        assert!(path.to_string_lossy().ends_with(".mp4"));
        assert_eq!(std::fs::read(&path).unwrap(), file.data);

        drop(temp);
        assert!(!path.exists());
    }
}
