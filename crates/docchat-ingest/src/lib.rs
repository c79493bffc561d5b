#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod chunker;
pub mod pdf;
pub mod processor;

pub use chunker::{split_with_overlap, CHUNK_CHARS, OVERLAP_CHARS};
pub use pdf::{discover_pdf_files, extract_page_texts, PageText};
pub use processor::DocumentProcessor;
