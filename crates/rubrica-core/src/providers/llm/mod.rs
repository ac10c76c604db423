pub mod gemini;

use crate::model::LlmResponse;
use async_trait::async_trait;

/// Boundary to the text-generation collaborator.
///
/// The grader treats whatever comes back as untrusted input: no assumption
/// of well-formed JSON, schema compliance, or non-empty text. Implementors
/// should surface transport and API failures as errors rather than empty
/// replies.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str, system: Option<&[String]>)
        -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}
