use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{McqResult, SelectedSource, Submission},
    services::{
        extraction::ExtractorRegistry,
        model_service::CompletionClient,
        prompt_service::{build_prompt, truncate_extracted},
    },
};

/// Runs one submission through select → extract → truncate → prompt → generate.
pub struct McqService {
    extractors: ExtractorRegistry,
    completion_client: Arc<dyn CompletionClient>,
}

impl McqService {
    pub fn new(extractors: ExtractorRegistry, completion_client: Arc<dyn CompletionClient>) -> Self {
        Self {
            extractors,
            completion_client,
        }
    }

    pub async fn generate(&self, submission: &Submission) -> AppResult<McqResult> {
        let selected = submission.select_source();
        let source = selected.kind();
        log::info!("Selected source: {}", source.label());

        let raw_text = match selected {
            SelectedSource::File(kind, file) => self.extractors.extract(kind, file).await?,
            SelectedSource::Topic => String::new(),
        };

        let extracted = truncate_extracted(&raw_text);
        log::info!(
            "Extracted {} chars, using {} after truncation",
            raw_text.chars().count(),
            extracted.chars().count()
        );

        let prompt = build_prompt(
            &submission.difficulty,
            submission.count,
            &extracted,
            &submission.topic,
        );

        let mcqs = self.completion_client.complete(&prompt).await?;

        Ok(McqResult::new(source, mcqs))
    }
}
