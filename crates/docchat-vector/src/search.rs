//! Top-K similarity search over the persistent chunk table.

use arrow_array::{Float32Array, StringArray};
use async_trait::async_trait;
use futures::TryStreamExt;
use lancedb::query::{ExecutableQuery, QueryBase};
use lancedb::{connect, Connection};
use std::path::Path;

use docchat_core::error::RetrievalError;
use docchat_core::traits::{Embedder, Retriever};
use docchat_core::types::RetrievedChunk;

pub struct LanceRetriever {
    db: Connection,
    table_name: String,
    embedder: Box<dyn Embedder>,
}

impl LanceRetriever {
    pub async fn new(
        db_path: &Path,
        table_name: &str,
        embedder: Box<dyn Embedder>,
    ) -> Result<Self, RetrievalError> {
        let db = connect(db_path.to_string_lossy().as_ref())
            .execute()
            .await
            .map_err(|e| RetrievalError::IndexUnavailable(e.to_string()))?;
        Ok(Self {
            db,
            table_name: table_name.to_string(),
            embedder,
        })
    }
}

#[async_trait]
impl Retriever for LanceRetriever {
    /// Embed the query with the indexing-time model and return the `k`
    /// highest-similarity chunks, most similar first. Distance metric and
    /// tie-break are the store's.
    async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedChunk>, RetrievalError> {
        let query_vec = self
            .embedder
            .embed_batch(&[query.to_string()])
            .map_err(|e| RetrievalError::Embedding(e.to_string()))?
            .remove(0);

        let table = self
            .db
            .open_table(&self.table_name)
            .execute()
            .await
            .map_err(|e| RetrievalError::IndexUnavailable(e.to_string()))?;
        let mut stream = table
            .vector_search(query_vec)
            .map_err(|e| RetrievalError::Search(e.to_string()))?
            .limit(k)
            .execute()
            .await
            .map_err(|e| RetrievalError::Search(e.to_string()))?;

        let mut hits = Vec::new();
        while let Some(batch) = stream
            .try_next()
            .await
            .map_err(|e| RetrievalError::Search(e.to_string()))?
        {
            for i in 0..batch.num_rows() {
                let id = str_col(&batch, "id", i)?;
                let doc_path = str_col(&batch, "doc_path", i)?;
                let content = str_col(&batch, "content", i)?;
                // LanceDB reports L2 distance in `_distance`; flip it so
                // higher is better, like every other score in the system.
                let score = match batch
                    .column_by_name("_distance")
                    .and_then(|c| c.as_any().downcast_ref::<Float32Array>())
                {
                    Some(col) => 1.0 - col.value(i),
                    None => 0.5,
                };
                hits.push(RetrievedChunk {
                    id,
                    score,
                    doc_path,
                    content,
                });
            }
        }
        Ok(hits)
    }
}

fn str_col(
    batch: &arrow_array::RecordBatch,
    name: &str,
    row: usize,
) -> Result<String, RetrievalError> {
    batch
        .column_by_name(name)
        .and_then(|c| c.as_any().downcast_ref::<StringArray>())
        .map(|c| c.value(row).to_string())
        .ok_or_else(|| RetrievalError::Search(format!("column '{name}' missing from result")))
}
