use arrow_schema::{DataType, Field, Schema};
use std::sync::Arc;

/// Must match the embedder's output dimensionality; the FixedSizeList
/// column rejects any row with a different length.
pub const EMBEDDING_DIM: i32 = 384;

pub fn build_arrow_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("doc_id", DataType::Utf8, false),
        Field::new("doc_path", DataType::Utf8, false),
        Field::new("page", DataType::Int32, false),
        Field::new("start_offset", DataType::Int32, false),
        Field::new("chunk_index", DataType::Int32, false),
        Field::new("total_chunks", DataType::Int32, false),
        Field::new("content", DataType::Utf8, false),
        Field::new(
            "vector",
            DataType::FixedSizeList(
                Arc::new(Field::new("item", DataType::Float32, true)),
                EMBEDDING_DIM,
            ),
            true,
        ),
    ]))
}
