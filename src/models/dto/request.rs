use std::collections::HashMap;

use actix_multipart::Multipart;
use futures::TryStreamExt;

use crate::errors::{AppError, AppResult};
use crate::models::domain::submission::{normalize_difficulty, parse_count};
use crate::models::domain::{SourceKind, Submission, UploadedFile};

/// Raw multipart form contents before defaults are applied.
#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<SourceKind, UploadedFile>,
}

impl SubmissionForm {
    /// Drains a multipart payload. Each part is capped at `max_part_bytes`.
    pub async fn from_multipart(mut payload: Multipart, max_part_bytes: usize) -> AppResult<Self> {
        let mut form = SubmissionForm::default();

        while let Some(mut field) = payload.try_next().await? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);
            let content_type = field.content_type().map(|mime| mime.to_string());

            let mut data = Vec::new();
            while let Some(chunk) = field.try_next().await? {
                if data.len() + chunk.len() > max_part_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "field '{}' exceeds the {} byte limit",
                        name, max_part_bytes
                    )));
                }
                data.extend_from_slice(&chunk);
            }

            match SourceKind::from_file_field(&name) {
                Some(kind) => form.add_file(
                    kind,
                    UploadedFile {
                        file_name: file_name.unwrap_or_default(),
                        content_type,
                        data,
                    },
                ),
                None => {
                    form.fields
                        .insert(name, String::from_utf8_lossy(&data).into_owned());
                }
            }
        }

        Ok(form)
    }

    /// Keeps the first non-empty part per file field. An empty part only
    /// fills a slot nothing else has claimed.
    fn add_file(&mut self, kind: SourceKind, file: UploadedFile) {
        let keep_existing = self
            .files
            .get(&kind)
            .is_some_and(|existing| !existing.is_empty() || file.is_empty());
        if !keep_existing {
            self.files.insert(kind, file);
        }
    }

    pub fn into_submission(mut self) -> Submission {
        let field = |fields: &HashMap<String, String>, key: &str| fields.get(key).cloned();

        let difficulty = normalize_difficulty(field(&self.fields, "difficulty").as_deref());
        let count = parse_count(field(&self.fields, "count").as_deref());
        let topic = self
            .fields
            .remove("topic")
            .map(|t| t.trim().to_string())
            .unwrap_or_default();

        Submission {
            difficulty,
            count,
            topic,
            files: self.files,
        }
    }
}
