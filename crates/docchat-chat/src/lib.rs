#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod client;
pub mod transcript;

pub use client::BackendClient;
pub use transcript::{Role, Transcript, Turn, GREETING};

/// User-facing prefix for any failure reaching the query service.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Não foi possível conectar ao backend. Verifique se ele está rodando.";

/// One chat session: a transcript plus the service client. A lookup
/// failure never ends the session silently; it always surfaces as a turn.
pub struct ChatSession {
    transcript: Transcript,
    client: BackendClient,
}

impl ChatSession {
    pub fn new(client: BackendClient) -> Self {
        Self {
            transcript: Transcript::new(),
            client,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Append the user's turn, query the service, and append the assistant
    /// turn (answer or visible error). Returns the assistant's text.
    pub async fn submit(&mut self, input: &str) -> String {
        self.transcript.push_user(input);
        let reply = match self.client.ask(input).await {
            Ok(answer) => answer,
            Err(e) => format!("{CONNECTION_ERROR_MESSAGE} (Erro: {e})"),
        };
        self.transcript.push_assistant(&reply);
        reply
    }
}
