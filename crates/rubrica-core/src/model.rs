use serde::{Deserialize, Serialize};

/// Reply envelope returned by an [`LlmClient`](crate::providers::llm::LlmClient).
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub meta: serde_json::Value,
}

/// Per-dimension values keyed by the model's wire names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePair<T> {
    pub scientific_knowledge: T,
    pub critical_thinking: T,
}

/// Per-dimension values under the short names used by storage and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPair<T> {
    pub scientific: T,
    pub critical: T,
}

/// A model reply that passed structural validation: scores are integers
/// clamped into the rubric range, rationale and key-sentence lists have at
/// least two entries each and pair up one-to-one per dimension.
///
/// Built as a fresh value from the parsed JSON; the raw parse tree is never
/// mutated in place, so no partially-normalized intermediate can escape.
#[derive(Debug, Clone, PartialEq)]
pub struct RubricResponse {
    pub scores: WirePair<i64>,
    pub rationales: WirePair<Vec<String>>,
    pub key_sentences: WirePair<Vec<String>>,
}

impl RubricResponse {
    /// Projects the validated reply into the persisted shape. Pure renaming
    /// (`scientificKnowledge` → `scientific`, `criticalThinking` →
    /// `critical`); all correctness guarantees were established during
    /// validation.
    pub fn into_result(self) -> GradingResult {
        GradingResult {
            scores: ResultPair {
                scientific: self.scores.scientific_knowledge,
                critical: self.scores.critical_thinking,
            },
            rationales: ResultPair {
                scientific: self.rationales.scientific_knowledge,
                critical: self.rationales.critical_thinking,
            },
            key_sentences: ResultPair {
                scientific: self.key_sentences.scientific_knowledge,
                critical: self.key_sentences.critical_thinking,
            },
        }
    }
}

/// The validated grading outcome handed to persistence and returned to the
/// caller. Created once per grading call; the grader holds no state across
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub scores: ResultPair<i64>,
    pub rationales: ResultPair<Vec<String>>,
    pub key_sentences: ResultPair<Vec<String>>,
}
