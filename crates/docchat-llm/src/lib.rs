#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod ollama;
pub mod prompt;

pub use ollama::{OllamaClient, MAX_ANSWER_TOKENS};
pub use prompt::{PromptTemplate, NO_INFO_REPLY, OUT_OF_SCOPE_REPLY, RELATED_INFO_PREFIX};
