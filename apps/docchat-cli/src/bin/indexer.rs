use std::{env, fs, path::PathBuf};

use docchat_core::config::Config;
use docchat_embed::get_default_embedder;
use docchat_ingest::DocumentProcessor;
use docchat_vector::LanceIndexWriter;

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let args: Vec<String> = env::args().skip(1).collect();
    let docs_dir = args
        .iter()
        .find(|a| !a.starts_with('-'))
        .map(PathBuf::from)
        .unwrap_or_else(|| config.docs_dir());

    println!("docchat PDF Indexer\n===================");
    println!("Documents directory: {}", docs_dir.display());

    let processor = DocumentProcessor::new();
    let chunks = processor.process_directory(&docs_dir)?;

    let index_dir = config.index_dir();
    fs::create_dir_all(&index_dir)?;
    println!("Index directory: {}", index_dir.display());

    let embedder = get_default_embedder()?;
    let texts: Vec<String> = chunks.iter().map(|c| c.content.clone()).collect();
    let embeddings = embedder.embed_batch(&texts)?;

    let rt = tokio::runtime::Runtime::new()?;
    let writer = rt.block_on(LanceIndexWriter::new(&index_dir, &config.index_table()))?;
    rt.block_on(writer.append(&chunks, &embeddings))?;
    let total = rt.block_on(writer.count_rows())?;

    println!("\n✅ Indexing completed successfully!");
    println!("📊 Indexed {} chunks ({} rows in table)", chunks.len(), total);
    println!("\n💡 Start the query service with: cargo run --bin docchat-server");
    Ok(())
}
