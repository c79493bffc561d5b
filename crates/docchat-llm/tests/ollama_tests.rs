use docchat_core::error::GenerationError;
use docchat_core::traits::LanguageModel;
use docchat_llm::OllamaClient;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn generate_returns_the_model_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama3",
            "stream": false,
            "options": { "num_predict": 150 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "llama3",
            "response": "O horário é das 9h às 18h.",
            "done": true
        })))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri(), "llama3");
    let answer = client.generate("qual o horário?").await.expect("generate");
    assert_eq!(answer, "O horário é das 9h às 18h.");
}

#[tokio::test]
async fn non_success_status_is_a_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri(), "llama3");
    let err = client.generate("oi").await.unwrap_err();
    assert!(matches!(err, GenerationError::BadStatus(500)));
}

#[tokio::test]
async fn unparseable_body_is_a_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = OllamaClient::new(server.uri(), "llama3");
    let err = client.generate("oi").await.unwrap_err();
    assert!(matches!(err, GenerationError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_generation_error() {
    // Nothing listens here.
    let client = OllamaClient::new("http://127.0.0.1:1", "llama3");
    let err = client.generate("oi").await.unwrap_err();
    assert!(matches!(err, GenerationError::Unreachable(_)));
}
