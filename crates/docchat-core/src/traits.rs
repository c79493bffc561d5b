use crate::error::{GenerationError, RetrievalError};
use crate::types::RetrievedChunk;
use async_trait::async_trait;

/// Text embedding backend. One implementation is used for both indexing and
/// query time; mixing models across the two silently breaks retrieval.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    fn max_len(&self) -> usize;
    fn embed_batch(&self, texts: &[String]) -> anyhow::Result<Vec<Vec<f32>>>;
}

/// Top-K similarity search over the persistent vector index. Read-only:
/// the index is never mutated after the offline indexing run.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str, k: usize)
        -> Result<Vec<RetrievedChunk>, RetrievalError>;
}

/// A language model that turns a fully rendered prompt into one answer.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
