//! HTTP surface of the query service.
//!
//! One endpoint, `POST /perguntar`. Failures never become error statuses:
//! every pipeline error is converted to an `{"erro": …}` payload with HTTP
//! 200, so callers distinguish outcomes by payload shape only.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use docchat_core::traits::{LanguageModel, Retriever};
use docchat_rag::RagPipeline;

#[derive(Debug, Serialize, Deserialize)]
pub struct Pergunta {
    pub texto: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resposta {
    Sucesso { resposta: String },
    Falha { erro: String },
}

pub fn app_router<R, L>(pipeline: Arc<RagPipeline<R, L>>) -> Router
where
    R: Retriever + 'static,
    L: LanguageModel + 'static,
{
    // Wide-open policy: local/demo deployment, every origin may call.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/perguntar", post(perguntar::<R, L>))
        .with_state(pipeline)
        .layer(cors)
}

pub async fn run_server<R, L>(
    pipeline: Arc<RagPipeline<R, L>>,
    bind_addr: &str,
) -> anyhow::Result<()>
where
    R: Retriever + 'static,
    L: LanguageModel + 'static,
{
    let app = app_router(pipeline);
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{bind_addr}'"))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("docchat-server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "docchat-server"}))
}

async fn perguntar<R, L>(
    State(pipeline): State<Arc<RagPipeline<R, L>>>,
    Json(pergunta): Json<Pergunta>,
) -> Json<Resposta>
where
    R: Retriever + 'static,
    L: LanguageModel + 'static,
{
    info!(pergunta = %pergunta.texto, "question received");
    match pipeline.answer(&pergunta.texto).await {
        Ok(resposta) => Json(Resposta::Sucesso { resposta }),
        Err(e) => {
            error!(error = %e, "request failed");
            Json(Resposta::Falha {
                erro: format!("Ocorreu um erro durante o processamento: {e}"),
            })
        }
    }
}
