//! LLM-backed query expansion over a base retriever.
//!
//! The question is rephrased into a few variants by the language model and
//! the hits for the original plus every variant are merged, deduplicated by
//! chunk id (keeping the best score), most similar first. An expansion
//! failure degrades to searching with the original question only; the
//! request still fails later if the model is truly down.

use std::cmp::Ordering;

use async_trait::async_trait;
use docchat_core::error::{GenerationError, RetrievalError};
use docchat_core::traits::{LanguageModel, Retriever};
use docchat_core::types::RetrievedChunk;
use tracing::debug;

/// Number of rephrasings requested from the model.
pub const QUERY_VARIANTS: usize = 3;

const EXPANSION_TEMPLATE: &str = "\
Você é um assistente de IA. Sua tarefa é gerar {n} reformulações diferentes \
da pergunta do usuário, para recuperar trechos relevantes de um banco de \
dados vetorial. Gere somente as reformulações, uma por linha, sem numeração \
e sem comentários.

Pergunta original: {question}";

pub struct MultiQueryRetriever<R, L>
where
    R: Retriever,
    L: LanguageModel,
{
    inner: R,
    model: L,
}

impl<R, L> MultiQueryRetriever<R, L>
where
    R: Retriever,
    L: LanguageModel,
{
    pub fn new(inner: R, model: L) -> Self {
        Self { inner, model }
    }

    async fn expand(&self, question: &str) -> Result<Vec<String>, GenerationError> {
        let prompt = EXPANSION_TEMPLATE
            .replace("{n}", &QUERY_VARIANTS.to_string())
            .replace("{question}", question);
        let raw = self.model.generate(&prompt).await?;
        Ok(parse_variants(&raw, question))
    }
}

/// One rephrasing per non-empty line; list markers ("1.", "2)", "-") are
/// stripped and a line repeating the original question is dropped.
fn parse_variants(raw: &str, original: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | ')' | '-'))
                .trim_start()
        })
        .filter(|line| !line.is_empty() && !line.eq_ignore_ascii_case(original))
        .take(QUERY_VARIANTS)
        .map(str::to_string)
        .collect()
}

#[async_trait]
impl<R, L> Retriever for MultiQueryRetriever<R, L>
where
    R: Retriever,
    L: LanguageModel,
{
    async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedChunk>, RetrievalError> {
        let mut queries = vec![query.to_string()];
        match self.expand(query).await {
            Ok(variants) => queries.extend(variants),
            Err(e) => {
                debug!(error = %e, "query expansion failed, searching with the original question only");
            }
        }

        let mut hits: Vec<RetrievedChunk> = Vec::new();
        for q in &queries {
            for hit in self.inner.retrieve(q, k).await? {
                match hits.iter_mut().find(|h| h.id == hit.id) {
                    Some(existing) => {
                        if hit.score > existing.score {
                            existing.score = hit.score;
                        }
                    }
                    None => hits.push(hit),
                }
            }
        }
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        Ok(hits)
    }
}
