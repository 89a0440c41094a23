use async_trait::async_trait;

use super::errors::UpstreamError;

/// Service port for the external generative-language model.
///
/// One call per resolution: the whole prompt goes in, raw completion text
/// comes out. Interpreting that text is the resolver's job.
#[async_trait]
pub trait TextCompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError>;
}
