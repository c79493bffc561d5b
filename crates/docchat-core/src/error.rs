//! Failure taxonomy shared by every stage of the pipeline.
//!
//! Each enum covers one failure domain: ingestion aborts the offline run,
//! retrieval/generation errors are converted to an error payload at the
//! HTTP boundary, and transport errors become a visible chat turn.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal to an indexing run. There is no partial-index rollback: whatever
/// was appended before the failure stays in the table.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("source folder not found: {}", .0.display())]
    SourceDirMissing(PathBuf),

    #[error("no PDF documents found under {}", .0.display())]
    NoDocuments(PathBuf),

    #[error("failed to read PDF {}: {source}", .path.display())]
    UnreadablePdf {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("vector index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("query embedding failed: {0}")]
    Embedding(String),

    #[error("similarity search failed: {0}")]
    Search(String),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("language model unreachable: {0}")]
    Unreachable(String),

    #[error("language model returned HTTP {0}")]
    BadStatus(u16),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("query service unreachable: {0}")]
    Unreachable(String),

    #[error("query service returned HTTP {0}")]
    BadStatus(u16),

    #[error("malformed service response: {0}")]
    MalformedResponse(String),
}
