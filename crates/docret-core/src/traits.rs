use anyhow::Result;
use async_trait::async_trait;

/// Embedding service seam. Implementations live outside this workspace
/// (hosted APIs, local model servers); tests use deterministic mocks.
#[async_trait]
pub trait Embedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

/// Chat-completion seam used for answer synthesis. A failed call is not
/// fatal: callers fall back to a templated summary of the retrieved
/// passages.
pub trait LlmClient {
    fn generate(&self, prompt: &str, max_tokens: usize) -> Result<String>;
}
