//! Answer synthesis: forward retrieved passages to the LLM seam, fall
//! back to a templated keyword-style summary when the call fails.

use crate::query::SearchResult;
use docret_config::LlmConfig;
use docret_core::traits::LlmClient;
use tracing::warn;

pub const NO_RESULTS_ANSWER: &str = "I couldn't find any relevant information about that topic \
     in the knowledge base. Please try asking about a different topic.";

/// Context block listing every retrieved passage with provenance.
pub fn build_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("[Chunk {}] {} ({}):\n{}", i + 1, r.title, r.category, r.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_prompt(question: &str, results: &[SearchResult]) -> String {
    format!(
        "You are a helpful assistant answering questions from a knowledge base.\n\n\
         Context passages:\n{}\n\nUser question: {}\n\n\
         Answer based on the passages above, combining information from \
         multiple passages when relevant. If they don't contain enough \
         information, say so.",
        build_context(results),
        question
    )
}

/// Produce an answer for `question` from `results`. A failed model call
/// degrades to [`fallback_answer`] rather than an error.
pub fn synthesize_answer(
    llm: &dyn LlmClient,
    question: &str,
    results: &[SearchResult],
    config: &LlmConfig,
) -> String {
    if results.is_empty() {
        return NO_RESULTS_ANSWER.to_string();
    }

    let prompt = build_prompt(question, results);
    match llm.generate(&prompt, config.max_tokens as usize) {
        Ok(answer) => answer,
        Err(err) => {
            warn!("LLM call failed, using keyword-style summary: {}", err);
            fallback_answer(results)
        }
    }
}

/// Templated summary of the retrieved passages, ordered by relevance.
pub fn fallback_answer(results: &[SearchResult]) -> String {
    let mut response = String::from("Based on the knowledge base, here's what I found:\n\n");

    for (i, result) in results.iter().enumerate() {
        response.push_str(&format!(
            "**{}. {}** ({}) - Relevance: {:.0}\n\n",
            i + 1,
            result.title,
            result.category,
            result.relevance
        ));
        response.push_str(&result.text);
        response.push_str("\n\n");

        if !result.context.is_empty() {
            response.push_str(&format!("*Context: {}*\n\n", result.context));
        }

        response.push_str("---\n\n");
    }

    if results.len() > 1 {
        response.push_str(&format!(
            "**Summary:** I found {} relevant pieces of information in the \
             knowledge base. The results are ordered by relevance to your query.",
            results.len()
        ));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct EchoLlm;

    impl LlmClient for EchoLlm {
        fn generate(&self, prompt: &str, _max_tokens: usize) -> anyhow::Result<String> {
            Ok(format!("echo: {}", prompt.len()))
        }
    }

    struct FailingLlm;

    impl LlmClient for FailingLlm {
        fn generate(&self, _prompt: &str, _max_tokens: usize) -> anyhow::Result<String> {
            Err(anyhow!("service unavailable"))
        }
    }

    fn result(id: u64, title: &str, context: &str) -> SearchResult {
        SearchResult {
            id,
            title: title.to_string(),
            category: "iot".to_string(),
            text: format!("Passage body {}.", id),
            relevance: 90.0 - id as f32,
            context: context.to_string(),
        }
    }

    #[test]
    fn successful_model_call_is_returned_verbatim() {
        let results = vec![result(0, "doc a", "")];
        let answer = synthesize_answer(&EchoLlm, "question?", &results, &LlmConfig::default());
        assert!(answer.starts_with("echo: "));
    }

    #[test]
    fn failed_model_call_falls_back_to_template() {
        let results = vec![result(0, "doc a", ""), result(1, "doc b", "Next: more...")];
        let answer = synthesize_answer(&FailingLlm, "question?", &results, &LlmConfig::default());

        assert!(answer.starts_with("Based on the knowledge base"));
        assert!(answer.contains("**1. doc a** (iot) - Relevance: 90"));
        assert!(answer.contains("*Context: Next: more...*"));
        assert!(answer.contains("**Summary:** I found 2 relevant pieces"));
    }

    #[test]
    fn no_results_short_circuits_the_model() {
        let answer = synthesize_answer(&FailingLlm, "question?", &[], &LlmConfig::default());
        assert_eq!(answer, NO_RESULTS_ANSWER);
    }

    #[test]
    fn single_result_fallback_has_no_summary_line() {
        let answer = fallback_answer(&[result(0, "doc a", "")]);
        assert!(!answer.contains("**Summary:**"));
    }

    #[test]
    fn context_block_numbers_passages() {
        let results = vec![result(0, "doc a", ""), result(1, "doc b", "")];
        let block = build_context(&results);
        assert!(block.contains("[Chunk 1] doc a (iot):"));
        assert!(block.contains("[Chunk 2] doc b (iot):"));
    }
}
