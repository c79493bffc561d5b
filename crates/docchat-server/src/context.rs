//! Startup lifecycle of the query service.
//!
//! Every long-lived collaborator (vector index connection, embedder, LLM
//! client, composed pipeline) is constructed once here and injected into
//! the router as state. After `initialize` succeeds the index is treated
//! as static until the process restarts.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use docchat_core::config::{Config, LLM_MODEL};
use docchat_embed::get_default_embedder;
use docchat_llm::OllamaClient;
use docchat_rag::{MultiQueryRetriever, RagPipeline};
use docchat_vector::LanceRetriever;

pub struct ServiceContext {
    pub pipeline:
        Arc<RagPipeline<MultiQueryRetriever<LanceRetriever, OllamaClient>, OllamaClient>>,
}

impl ServiceContext {
    pub async fn initialize(config: &Config) -> Result<Self> {
        let index_dir = config.index_dir();
        let table = config.index_table();
        info!(index = %index_dir.display(), table = %table, "loading vector index");

        let embedder = get_default_embedder()?;
        let model = OllamaClient::new(config.ollama_base_url(), LLM_MODEL);
        let search = LanceRetriever::new(&index_dir, &table, embedder).await?;
        // The same model rephrases the question for retrieval and generates
        // the final answer.
        let retriever = MultiQueryRetriever::new(search, model.clone());
        let pipeline = Arc::new(RagPipeline::new(retriever, model));
        info!("query service ready");
        Ok(Self { pipeline })
    }
}
