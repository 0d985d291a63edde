use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Sends a single prompt to a hosted chat model and returns the reply text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatCompletionRequest {
    pub fn single_user_message(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(prompt.to_string()),
            }],
        }
    }
}

impl ChatCompletionResponse {
    pub fn first_choice_content(self) -> AppResult<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::UpstreamError("completion response contained no message content".to_string())
            })
    }
}

/// OpenAI-compatible chat completions (Groq by default).
pub struct ModelService {
    client: Client<OpenAIConfig>,
    model: String,
}

impl ModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.groq_api_key.expose_secret())
            .with_api_base(&config.groq_api_base);

        Self {
            client: Client::with_config(openai_config),
            model: config.completion_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionClient for ModelService {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        log::info!(
            "Requesting completion from model {} ({} prompt chars)",
            self.model,
            prompt.chars().count()
        );

        let request = ChatCompletionRequest::single_user_message(&self.model, prompt);
        let response: ChatCompletionResponse = self.client.chat().create_byot(request).await?;

        response.first_choice_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_has_single_user_message() {
        let request = ChatCompletionRequest::single_user_message("llama-3.1-8b-instant", "prompt");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "model": "llama-3.1-8b-instant",
                "messages": [{ "role": "user", "content": "prompt" }]
            })
        );
    }

    #[test]
    fn first_choice_content_is_taken_verbatim() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Q1) first\n" } },
                { "index": 1, "message": { "role": "assistant", "content": "Q1) second" } }
            ]
        }))
        .unwrap();

        assert_eq!(response.first_choice_content().unwrap(), "Q1) first\n");
    }

    #[test]
    fn empty_choices_is_upstream_error() {
        let response: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [] })).unwrap();

        let err = response.first_choice_content().unwrap_err();
        assert_eq!(err.error_code(), "UPSTREAM_ERROR");
    }

    #[test]
    fn model_service_uses_configured_model() {
        let service = ModelService::new(&Config::test_config());
        assert_eq!(service.model(), "test-model");
    }
}
