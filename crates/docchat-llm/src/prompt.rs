//! The fixed instruction template filled with retrieved context and the
//! verbatim question.
//!
//! The response policy (greeting handling, fallback sentences, out-of-scope
//! refusal) is a behavioral contract enforced only by instructing the model;
//! nothing here can verify compliance.

use docchat_core::types::RetrievedChunk;

/// Literal prefix the model must use when only related info was found.
pub const RELATED_INFO_PREFIX: &str =
    "Não encontrei uma resposta direta, mas aqui está uma informação relacionada:";

/// Literal reply when the context holds nothing relevant.
pub const NO_INFO_REPLY: &str = "Não encontrei informações sobre este tópico nos documentos.";

/// Literal reply to out-of-scope requests (jokes, opinions, unrelated topics).
pub const OUT_OF_SCOPE_REPLY: &str =
    "Posso responder apenas perguntas relacionadas ao conteúdo dos documentos.";

const TEMPLATE: &str = r#"
<instrucoes>
Você é um assistente de IA especialista em análise de documentos. Sua missão é responder à pergunta do usuário de forma útil, precisa e CONCISA, baseando-se estritamente no conteúdo encontrado no bloco <contexto>.

## REGRAS DE OURO ##
- **Seja Direto:** NUNCA mencione o contexto, o documento ou de onde você tirou a informação. Apenas forneça a resposta.
- **Seja Conciso:** Mantenha suas respostas o mais breve possível, idealmente entre 1 a 3 frases.
- **Lógica Negativa:** Se a resposta para a pergunta for negativa, comece sua resposta com "Não" e NUNCA com "Sim".

## SAUDAÇÕES ##
1. Se a mensagem contiver apenas uma saudação, responda somente com a saudação, nada mais.
2. Se a mensagem contiver uma saudação e uma pergunta, responda com a saudação seguida da resposta.
3. Se a mensagem contiver apenas uma pergunta, responda sem saudação.

## HIERARQUIA DE RESPOSTA ##
1. Verifique se o contexto contém uma resposta direta e explícita para a pergunta. Se sim, forneça essa resposta, seguindo as Regras de Ouro.
2. Se não houver uma resposta direta, procure pela informação mais relevante no contexto. Ao apresentar essa informação, comece sua resposta EXATAMENTE com a frase: "Não encontrei uma resposta direta, mas aqui está uma informação relacionada:"
3. Se o contexto não tiver nenhuma informação relevante, responda EXATAMENTE com a frase: "Não encontrei informações sobre este tópico nos documentos."
4. Se o pedido estiver fora do escopo dos documentos (piadas, opiniões, assuntos não relacionados), responda EXATAMENTE com a frase: "Posso responder apenas perguntas relacionadas ao conteúdo dos documentos."

Suas instruções terminam aqui.
</instrucoes>

<contexto>
{context}
</contexto>

<pergunta>
{question}
</pergunta>

<resposta>
"#;

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: &'static str,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self { template: TEMPLATE }
    }
}

impl PromptTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the template with the retrieved chunks (similarity order, most
    /// similar first) and the verbatim question text.
    pub fn render(&self, context: &[RetrievedChunk], question: &str) -> String {
        let joined: Vec<&str> = context.iter().map(|c| c.content.as_str()).collect();
        self.template
            .replace("{context}", &joined.join("\n\n"))
            .replace("{question}", question)
    }
}
