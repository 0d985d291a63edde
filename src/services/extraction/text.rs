use async_trait::async_trait;

use super::TextExtractor;
use crate::{errors::AppResult, models::domain::UploadedFile};

/// Decodes UTF-8, dropping invalid sequences and a leading byte-order mark.
pub fn decode_text(bytes: &[u8]) -> String {
    let decoded: String = bytes.utf8_chunks().map(|chunk| chunk.valid()).collect();
    decoded.trim_start_matches('\u{feff}').to_string()
}

pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        Ok(decode_text(&file.data))
    }

    fn name(&self) -> &'static str {
        "plain-text"
    }
}
