use crate::rubric::Dimension;
use thiserror::Error;

/// Failure taxonomy for a single grading call.
///
/// Every variant aborts the whole call at the point of detection; no partial
/// result is ever returned. Out-of-range scores are the one deliberate
/// exception: they are clamped silently instead of rejected.
#[derive(Debug, Error)]
pub enum GradeError {
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The reply did not parse as JSON even after fence stripping. `raw`
    /// carries the full unwrapped text so an operator can see what the
    /// model actually said.
    #[error("model response is not valid JSON: {detail}")]
    MalformedJson { detail: String, raw: String },

    #[error("model response is not a JSON object")]
    NotAnObject,

    #[error("missing or malformed field `{0}` in model response")]
    MissingField(&'static str),

    #[error("{0}: score missing")]
    ScoreMissing(Dimension),

    #[error("{dim}: score has unsupported type ({found})")]
    ScoreTypeError { dim: Dimension, found: String },

    #[error("{dim}: no digits found in score text `{text}`")]
    ScoreExtractionFailed { dim: Dimension, text: String },

    #[error("{0}: rationales is not a list")]
    RationalesNotList(Dimension),

    #[error("{0}: keySentences is not a list")]
    KeySentencesNotList(Dimension),

    #[error("{0}: fewer than two rationales")]
    TooFewRationales(Dimension),

    #[error("{0}: fewer than two key sentences")]
    TooFewKeySentences(Dimension),

    #[error("{0}: rationale and key sentence counts differ")]
    CountMismatch(Dimension),

    /// Transport or API failure from the text-generation collaborator.
    #[error("model call failed: {0}")]
    Provider(#[source] anyhow::Error),
}
