pub mod command_executor;
pub mod extraction;
pub mod mcq_service;
pub mod model_service;
pub mod prompt_service;
pub mod transcription_service;
