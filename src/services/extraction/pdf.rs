use async_trait::async_trait;

use super::TextExtractor;
use crate::{
    errors::{AppError, AppResult},
    models::domain::UploadedFile,
};

/// Text-layer PDF extraction. Scanned PDFs without a text layer yield nothing.
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        let bytes = file.data.clone();

        // pdf-extract panics on some malformed inputs
        let outcome = actix_web::web::block(move || {
            std::panic::catch_unwind(|| {
                pdf_extract::extract_text_from_mem(&bytes).map_err(|e| e.to_string())
            })
        })
        .await?;

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(AppError::ExtractionError(format!("PDF parsing failed: {}", e))),
            Err(_) => Err(AppError::ExtractionError(
                "PDF parsing failed: the file appears to be corrupt".to_string(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "pdf-extract"
    }
}
