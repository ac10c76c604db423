mod grader_internal;

use crate::errors::GradeError;
use crate::model::GradingResult;
use crate::providers::llm::LlmClient;
use std::sync::Arc;

/// Sampling settings for the grading call. Defaults to the most
/// deterministic configuration the API offers, since grades must be
/// reproducible and auditable.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub candidate_count: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            top_k: 1,
            top_p: 0.0,
            candidate_count: 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraderConfig {
    pub provider: String,
    pub model: String,
    pub generation: GenerationConfig,
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.5-flash".to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Grades one essay per call: builds the rubric prompt, invokes the
/// configured model once, and normalizes the untrusted reply into a
/// [`GradingResult`]. Holds no state across calls and performs no retries;
/// callers wanting timeout or backoff wrap the invocation themselves.
#[derive(Clone)]
pub struct GraderService {
    pub(crate) config: GraderConfig,
    pub(crate) client: Arc<dyn LlmClient>,
}

impl GraderService {
    pub fn new(config: GraderConfig, client: Arc<dyn LlmClient>) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &GraderConfig {
        &self.config
    }

    pub async fn grade(&self, essay: &str) -> Result<GradingResult, GradeError> {
        grader_internal::run::grade_impl(self, essay).await
    }
}
