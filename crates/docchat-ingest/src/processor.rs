//! Turns a folder of PDFs into embedding-ready chunks.

use crate::chunker::{split_with_overlap, CHUNK_CHARS, OVERLAP_CHARS};
use crate::pdf::{discover_pdf_files, extract_page_texts};
use docchat_core::error::IngestionError;
use docchat_core::types::DocumentChunk;
use std::path::Path;

pub struct DocumentProcessor {
    chunk_chars: usize,
    overlap_chars: usize,
}

impl Default for DocumentProcessor {
    fn default() -> Self {
        Self {
            chunk_chars: CHUNK_CHARS,
            overlap_chars: OVERLAP_CHARS,
        }
    }
}

impl DocumentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every PDF under `docs_dir` and split each page into chunks.
    ///
    /// Fails on the first unreadable document; whatever a caller already
    /// wrote to the index before invoking this again is left untouched.
    pub fn process_directory(&self, docs_dir: &Path) -> Result<Vec<DocumentChunk>, IngestionError> {
        let files = discover_pdf_files(docs_dir)?;
        let mut all_chunks = Vec::new();
        for (file_index, file_path) in files.iter().enumerate() {
            println!(
                "Processing file {}/{}: {}",
                file_index + 1,
                files.len(),
                file_path.display()
            );
            let chunks = self.process_file(file_path)?;
            all_chunks.extend(chunks);
        }
        println!(
            "Processed {} files into {} chunks",
            files.len(),
            all_chunks.len()
        );
        Ok(all_chunks)
    }

    /// Chunk one PDF. `chunk_index` runs document-wide across pages.
    pub fn process_file(&self, file_path: &Path) -> Result<Vec<DocumentChunk>, IngestionError> {
        let doc_id = extract_doc_id(file_path);
        let doc_path = file_path.to_string_lossy().to_string();
        let pages = extract_page_texts(file_path)?;

        let mut document_chunks = Vec::new();
        let mut chunk_index = 0usize;
        for page in &pages {
            for (content, start_offset) in
                split_with_overlap(&page.text, self.chunk_chars, self.overlap_chars)
            {
                document_chunks.push(DocumentChunk {
                    id: format!("{doc_id}:{chunk_index}"),
                    doc_id: doc_id.clone(),
                    doc_path: doc_path.clone(),
                    page: page.page,
                    start_offset,
                    chunk_index,
                    total_chunks: 0,
                    content,
                });
                chunk_index += 1;
            }
        }
        let total_chunks = document_chunks.len();
        for chunk in &mut document_chunks {
            chunk.total_chunks = total_chunks;
        }
        Ok(document_chunks)
    }
}

fn extract_doc_id(file_path: &Path) -> String {
    file_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string_lossy().to_string())
}
