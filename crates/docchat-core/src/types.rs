//! Domain types shared by the indexer, the vector engine and the RAG
//! pipeline.

use serde::{Deserialize, Serialize};

pub type ChunkId = String;

/// A span of one PDF page that is independently embedded and indexed.
///
/// - `id`: globally unique chunk identifier (`<doc_id>:<chunk_index>`)
/// - `doc_id`: stable document identity (file stem)
/// - `doc_path`: original path to the source PDF
/// - `page`: 1-based page number the span was extracted from
/// - `start_offset`: starting character offset within the page text
/// - `chunk_index`/`total_chunks`: position within the parent document
/// - `content`: the text payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: ChunkId,
    pub doc_id: String,
    pub doc_path: String,
    pub page: usize,
    pub start_offset: usize,
    pub chunk_index: usize,
    pub total_chunks: usize,
    pub content: String,
}

/// One similarity-search hit, carrying enough text to build a prompt.
///
/// `score` is store-specific but higher is always better. Hits are returned
/// most similar first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub id: ChunkId,
    pub score: f32,
    pub doc_path: String,
    pub content: String,
}
