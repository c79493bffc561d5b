#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! Retrieval-and-generation pipeline: embed the question, fetch the top-K
//! chunks, fill the instruction template and ask the model for one answer.

pub mod multi_query;

pub use multi_query::{MultiQueryRetriever, QUERY_VARIANTS};

use anyhow::Result;
use docchat_core::traits::{LanguageModel, Retriever};
use docchat_llm::PromptTemplate;
use tracing::debug;

/// Number of chunks fed to the model per question.
pub const TOP_K: usize = 3;

pub struct RagPipeline<R, L>
where
    R: Retriever,
    L: LanguageModel,
{
    retriever: R,
    model: L,
    template: PromptTemplate,
}

impl<R, L> RagPipeline<R, L>
where
    R: Retriever,
    L: LanguageModel,
{
    pub fn new(retriever: R, model: L) -> Self {
        Self {
            retriever,
            model,
            template: PromptTemplate::new(),
        }
    }

    /// One question in, one answer out. Errors from any stage bubble up;
    /// the HTTP boundary is responsible for converting them to a payload.
    pub async fn answer(&self, question: &str) -> Result<String> {
        let hits = self.retriever.retrieve(question, TOP_K).await?;
        for (i, hit) in hits.iter().enumerate() {
            debug!(rank = i + 1, score = hit.score, id = %hit.id, "context chunk");
        }
        let prompt = self.template.render(&hits, question);
        let answer = self.model.generate(&prompt).await?;
        Ok(answer)
    }
}
