#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod schema;
pub mod search;
pub mod writer;

pub use search::LanceRetriever;
pub use writer::LanceIndexWriter;
