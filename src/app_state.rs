use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        extraction::ExtractorRegistry,
        mcq_service::McqService,
        model_service::{CompletionClient, ModelService},
        transcription_service::{Transcriber, WhisperApiTranscriber},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub mcq_service: Arc<McqService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the API clients once; they are shared read-only by every worker.
    pub fn new(config: Config) -> AppResult<Self> {
        let transcriber: Arc<dyn Transcriber> = Arc::new(WhisperApiTranscriber::new(&config)?);
        let extractors = ExtractorRegistry::from_config(&config, transcriber);
        let completion_client: Arc<dyn CompletionClient> = Arc::new(ModelService::new(&config));

        Ok(Self::with_services(config, extractors, completion_client))
    }

    pub fn with_services(
        config: Config,
        extractors: ExtractorRegistry,
        completion_client: Arc<dyn CompletionClient>,
    ) -> Self {
        Self {
            mcq_service: Arc::new(McqService::new(extractors, completion_client)),
            config: Arc::new(config),
        }
    }
}
