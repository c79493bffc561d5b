//! Minimal Ollama generation client.
//!
//! One blocking-style call per request, `stream: false`. The client is
//! built without a request timeout: a hung model call hangs the request,
//! matching the service contract.

use async_trait::async_trait;
use docchat_core::error::GenerationError;
use docchat_core::traits::LanguageModel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cap on generated length, forwarded as Ollama's `num_predict`.
pub const MAX_ANSWER_TOKENS: u32 = 150;

#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        debug!(model = %self.model, "calling ollama");
        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.model,
                prompt,
                stream: false,
                options: GenerateOptions {
                    num_predict: MAX_ANSWER_TOKENS,
                },
            })
            .send()
            .await
            .map_err(|e| GenerationError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::BadStatus(status.as_u16()));
        }
        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;
        Ok(body.response)
    }
}
