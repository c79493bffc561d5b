//! Whole-service flows: real LanceDB index + fake embedder + real Ollama
//! client against an HTTP stub.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docchat_core::types::DocumentChunk;
use docchat_embed::get_default_embedder;
use docchat_llm::{OllamaClient, NO_INFO_REPLY};
use docchat_rag::RagPipeline;
use docchat_server::app_router;
use docchat_vector::{LanceIndexWriter, LanceRetriever};

async fn seed_index(dir: &std::path::Path) -> anyhow::Result<()> {
    let chunks = vec![DocumentChunk {
        id: "manual:0".to_string(),
        doc_id: "manual".to_string(),
        doc_path: "/docs/manual.pdf".to_string(),
        page: 1,
        start_offset: 0,
        chunk_index: 0,
        total_chunks: 1,
        content: "o módulo de gestão de documentos permite anexar arquivos".to_string(),
    }];
    let embedder = get_default_embedder()?;
    let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
    let embeddings = embedder.embed_batch(&texts)?;
    let writer = LanceIndexWriter::new(dir, "chunks").await?;
    writer.append(&chunks, &embeddings).await?;
    Ok(())
}

async fn ask(app: axum::Router, texto: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/perguntar")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "texto": texto }).to_string(),
        ))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json"))
}

#[tokio::test]
async fn stubbed_model_fallback_reaches_the_client_verbatim() -> anyhow::Result<()> {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");
    let tmp = tempfile::tempdir()?;
    seed_index(tmp.path()).await?;

    let ollama = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "model": "llama3",
            "response": NO_INFO_REPLY,
            "done": true
        })))
        .mount(&ollama)
        .await;

    let retriever = LanceRetriever::new(tmp.path(), "chunks", get_default_embedder()?).await?;
    let model = OllamaClient::new(ollama.uri(), "llama3");
    let app = app_router(Arc::new(RagPipeline::new(retriever, model)));

    let (status, body) = ask(app, "Qual o horário de funcionamento?").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "resposta": NO_INFO_REPLY }));
    Ok(())
}

#[tokio::test]
async fn unreachable_model_degrades_to_an_error_payload() -> anyhow::Result<()> {
    std::env::set_var("APP_USE_FAKE_EMBEDDINGS", "1");
    let tmp = tempfile::tempdir()?;
    seed_index(tmp.path()).await?;

    let retriever = LanceRetriever::new(tmp.path(), "chunks", get_default_embedder()?).await?;
    // Nothing listens on this port.
    let model = OllamaClient::new("http://127.0.0.1:1", "llama3");
    let app = app_router(Arc::new(RagPipeline::new(retriever, model)));

    let (status, body) = ask(app, "Qual o horário?").await;
    assert_eq!(status, StatusCode::OK, "connection failures never escape as statuses");
    assert!(body.get("erro").is_some());
    Ok(())
}
