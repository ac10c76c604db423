use crate::errors::GradeError;
use crate::model::{RubricResponse, WirePair};
use crate::rubric::{Dimension, MIN_RATIONALES, SCORE_MAX, SCORE_MIN};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Parses the unwrapped reply and checks it against the rubric contract,
/// producing a fresh [`RubricResponse`]. The parse tree is read-only
/// throughout; normalized scores land in the new value, never back in the
/// tree, so no partially-normalized intermediate exists.
pub(crate) fn validate_impl(unwrapped: &str) -> Result<RubricResponse, GradeError> {
    let parsed: Value = serde_json::from_str(unwrapped).map_err(|e| {
        // Surface the raw text for operator diagnosis; it is the only
        // evidence of what the model actually said.
        tracing::error!(raw = unwrapped, error = %e, "model reply is not valid JSON");
        GradeError::MalformedJson {
            detail: e.to_string(),
            raw: unwrapped.to_string(),
        }
    })?;

    let root = parsed.as_object().ok_or(GradeError::NotAnObject)?;
    let scores = section(root, "scores")?;
    let rationales = section(root, "rationales")?;
    let key_sentences = section(root, "keySentences")?;

    let normalized_scores = WirePair {
        scientific_knowledge: normalize_score(
            Dimension::ScientificKnowledge,
            scores.get(Dimension::ScientificKnowledge.wire_key()),
        )?,
        critical_thinking: normalize_score(
            Dimension::CriticalThinking,
            scores.get(Dimension::CriticalThinking.wire_key()),
        )?,
    };

    let (sk_rationales, sk_sentences) =
        dimension_lists(Dimension::ScientificKnowledge, rationales, key_sentences)?;
    let (ct_rationales, ct_sentences) =
        dimension_lists(Dimension::CriticalThinking, rationales, key_sentences)?;

    Ok(RubricResponse {
        scores: normalized_scores,
        rationales: WirePair {
            scientific_knowledge: sk_rationales,
            critical_thinking: ct_rationales,
        },
        key_sentences: WirePair {
            scientific_knowledge: sk_sentences,
            critical_thinking: ct_sentences,
        },
    })
}

fn section<'a>(
    root: &'a serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<&'a serde_json::Map<String, Value>, GradeError> {
    root.get(name)
        .and_then(Value::as_object)
        .ok_or(GradeError::MissingField(name))
}

/// Coerces one raw score value to an integer in the rubric range.
///
/// Numbers round half away from zero (8.5 and 8.6 both become 9). Strings
/// contribute their first contiguous run of decimal digits ("8점" → 8,
/// "총점: 7 / 10" → 7). The result is clamped into [1,10]: the prompt
/// already constrains the model to that range, so minor overshoot is
/// absorbed silently instead of discarding an otherwise-valid reply.
pub(crate) fn normalize_score(
    dim: Dimension,
    value: Option<&Value>,
) -> Result<i64, GradeError> {
    let score = match value {
        None | Some(Value::Null) => return Err(GradeError::ScoreMissing(dim)),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i,
            // Floats and out-of-i64-range numbers both land here; the
            // clamp below makes extreme magnitudes irrelevant.
            None => n.as_f64().unwrap_or(f64::MAX).round() as i64,
        },
        Some(Value::String(s)) => match DIGIT_RUN.find(s) {
            Some(m) => m.as_str().parse::<i64>().unwrap_or(i64::MAX),
            None => {
                return Err(GradeError::ScoreExtractionFailed {
                    dim,
                    text: s.clone(),
                })
            }
        },
        Some(other) => {
            return Err(GradeError::ScoreTypeError {
                dim,
                found: json_type_name(other).to_string(),
            })
        }
    };

    Ok(score.clamp(SCORE_MIN, SCORE_MAX))
}

fn dimension_lists(
    dim: Dimension,
    rationales: &serde_json::Map<String, Value>,
    key_sentences: &serde_json::Map<String, Value>,
) -> Result<(Vec<String>, Vec<String>), GradeError> {
    let r = rationales
        .get(dim.wire_key())
        .and_then(Value::as_array)
        .ok_or(GradeError::RationalesNotList(dim))?;
    let ks = key_sentences
        .get(dim.wire_key())
        .and_then(Value::as_array)
        .ok_or(GradeError::KeySentencesNotList(dim))?;

    if r.len() < MIN_RATIONALES {
        return Err(GradeError::TooFewRationales(dim));
    }
    if ks.len() < MIN_RATIONALES {
        return Err(GradeError::TooFewKeySentences(dim));
    }
    if r.len() != ks.len() {
        return Err(GradeError::CountMismatch(dim));
    }

    Ok((
        r.iter().map(text_entry).collect(),
        ks.iter().map(text_entry).collect(),
    ))
}

// Non-string entries are kept as their compact JSON text rather than
// rejected; the contract constrains list shape and count, not entry type.
fn text_entry(v: &Value) -> String {
    match v.as_str() {
        Some(s) => s.to_string(),
        None => v.to_string(),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
