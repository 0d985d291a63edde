use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::McqResult;

#[derive(Debug, Clone, Serialize)]
pub struct McqResponseDto {
    pub source_used: String,
    pub mcqs: String,
    pub generated_at: DateTime<Utc>,
}

impl From<McqResult> for McqResponseDto {
    fn from(result: McqResult) -> Self {
        McqResponseDto {
            source_used: result.source.label().to_string(),
            mcqs: result.compose(),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::SourceKind;

    #[test]
    fn response_carries_label_and_composed_output() {
        let dto = McqResponseDto::from(McqResult::new(SourceKind::Docx, "Q1) ..."));

        assert_eq!(dto.source_used, "DOCX File");
        assert_eq!(dto.mcqs, "Source Used: DOCX File\n\nQ1) ...");

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["source_used"], "DOCX File");
        assert!(json["generated_at"].is_string());
    }
}
