//! Append-only writer for the persistent chunk table.
//!
//! Re-running the indexer over the same documents appends again; there is
//! no deduplication. The table is created on first write.

use anyhow::Result;
use arrow_array::{FixedSizeListArray, Int32Array, RecordBatch, RecordBatchIterator, StringArray};
use indicatif::{ProgressBar, ProgressStyle};
use lancedb::{connect, Connection};
use std::path::Path;
use std::sync::Arc;

use crate::schema::{build_arrow_schema, EMBEDDING_DIM};
use docchat_core::types::DocumentChunk;

pub struct LanceIndexWriter {
    db: Connection,
    table_name: String,
}

impl LanceIndexWriter {
    pub async fn new(db_path: &Path, table_name: &str) -> Result<Self> {
        let db = connect(db_path.to_string_lossy().as_ref()).execute().await?;
        Ok(Self {
            db,
            table_name: table_name.to_string(),
        })
    }

    /// Append one row per (chunk, embedding) pair.
    pub async fn append(&self, chunks: &[DocumentChunk], embeddings: &[Vec<f32>]) -> Result<()> {
        if chunks.is_empty() {
            println!("No chunks to index");
            return Ok(());
        }
        anyhow::ensure!(
            chunks.len() == embeddings.len(),
            "chunks and embeddings length must match"
        );
        println!(
            "Indexing {} chunks into LanceDB table: {}",
            chunks.len(),
            self.table_name
        );
        let pb = ProgressBar::new(chunks.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg}")?
                .progress_chars("#>-"),
        );
        let batch_size = 1000usize;
        let mut processed = 0usize;
        for (batch_chunks, batch_embs) in chunks
            .chunks(batch_size)
            .zip(embeddings.chunks(batch_size))
        {
            self.insert_batch(batch_chunks, batch_embs).await?;
            processed += batch_chunks.len();
            pb.set_position(processed as u64);
        }
        pb.finish_with_message("✅ LanceDB indexing completed!");
        println!("📊 Successfully indexed {} chunks", processed);
        Ok(())
    }

    /// Row count of the chunk table (0 when the table does not exist yet).
    pub async fn count_rows(&self) -> Result<usize> {
        let names = self.db.table_names().execute().await?;
        if !names.contains(&self.table_name) {
            return Ok(0);
        }
        let table = self.db.open_table(&self.table_name).execute().await?;
        Ok(table.count_rows(None).await?)
    }

    async fn insert_batch(
        &self,
        chunks: &[DocumentChunk],
        embeddings: &[Vec<f32>],
    ) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }
        let record_batch = chunks_to_record_batch(chunks, embeddings)?;
        let schema = record_batch.schema();
        let reader = Box::new(RecordBatchIterator::new(
            vec![Ok(record_batch)].into_iter(),
            schema,
        ));
        if self
            .db
            .table_names()
            .execute()
            .await?
            .contains(&self.table_name)
        {
            self.db
                .open_table(&self.table_name)
                .execute()
                .await?
                .add(reader)
                .execute()
                .await?;
        } else {
            self.db
                .create_table(&self.table_name, reader)
                .execute()
                .await?;
        }
        Ok(())
    }
}

fn chunks_to_record_batch(
    chunks: &[DocumentChunk],
    embeddings: &[Vec<f32>],
) -> Result<RecordBatch> {
    let schema = build_arrow_schema();
    let mut ids = Vec::new();
    let mut doc_ids = Vec::new();
    let mut doc_paths = Vec::new();
    let mut pages = Vec::new();
    let mut start_offsets = Vec::new();
    let mut chunk_indices = Vec::new();
    let mut total_chunks = Vec::new();
    let mut contents = Vec::new();
    let mut vectors: Vec<Option<Vec<Option<f32>>>> = Vec::new();
    for (chunk, embedding) in chunks.iter().zip(embeddings.iter()) {
        ids.push(chunk.id.clone());
        doc_ids.push(chunk.doc_id.clone());
        doc_paths.push(chunk.doc_path.clone());
        pages.push(chunk.page as i32);
        start_offsets.push(chunk.start_offset as i32);
        chunk_indices.push(chunk.chunk_index as i32);
        total_chunks.push(chunk.total_chunks as i32);
        contents.push(chunk.content.clone());
        vectors.push(Some(embedding.iter().map(|&x| Some(x)).collect()));
    }
    let record_batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from(ids)),
            Arc::new(StringArray::from(doc_ids)),
            Arc::new(StringArray::from(doc_paths)),
            Arc::new(Int32Array::from(pages)),
            Arc::new(Int32Array::from(start_offsets)),
            Arc::new(Int32Array::from(chunk_indices)),
            Arc::new(Int32Array::from(total_chunks)),
            Arc::new(StringArray::from(contents)),
            Arc::new(FixedSizeListArray::from_iter_primitive::<
                arrow_array::types::Float32Type,
                _,
                _,
            >(vectors.into_iter(), EMBEDDING_DIM)),
        ],
    )?;
    Ok(record_batch)
}
