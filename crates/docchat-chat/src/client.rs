//! HTTP client for the query service.

use docchat_core::error::TransportError;
use serde::{Deserialize, Serialize};

/// Shown when the service answered 200 but the payload carried no
/// `resposta` field (e.g. an `{"erro": …}` body).
pub const NO_ANSWER_FALLBACK: &str = "Desculpe, não consegui encontrar uma resposta.";

#[derive(Serialize)]
struct AskBody<'a> {
    texto: &'a str,
}

#[derive(Deserialize)]
struct AskReply {
    resposta: Option<String>,
}

pub struct BackendClient {
    client: reqwest::Client,
    url: String,
}

impl BackendClient {
    /// `url` is the full endpoint URL, e.g. `http://localhost:8000/perguntar`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub async fn ask(&self, texto: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .json(&AskBody { texto })
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::BadStatus(status.as_u16()));
        }
        let reply: AskReply = response
            .json()
            .await
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;
        Ok(reply
            .resposta
            .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string()))
    }
}
