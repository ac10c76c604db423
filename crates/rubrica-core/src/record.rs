use crate::model::GradingResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Flat AI-score row handed to the persistence collaborator, stored next to
/// human/expert scores under the shared `score_uid`.
///
/// Rationale lists are joined with newlines because downstream storage and
/// spreadsheet export work with flat string columns.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRecord {
    pub score_uid: Uuid,
    pub student_uid: String,
    pub rater_uid: String,
    pub knw_score: i64,
    pub crt_score: i64,
    pub knw_text: String,
    pub crt_text: String,
    pub graded_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn from_result(
        student_uid: impl Into<String>,
        rater_uid: impl Into<String>,
        result: &GradingResult,
    ) -> Self {
        Self {
            score_uid: Uuid::new_v4(),
            student_uid: student_uid.into(),
            rater_uid: rater_uid.into(),
            knw_score: result.scores.scientific,
            crt_score: result.scores.critical,
            knw_text: result.rationales.scientific.join("\n"),
            crt_text: result.rationales.critical.join("\n"),
            graded_at: Utc::now(),
        }
    }

    /// Score mapping as the single flat JSON string column used by
    /// spreadsheet export (non-ASCII kept as-is, not escaped).
    pub fn scores_column(&self) -> String {
        serde_json::json!({
            "scientific": self.knw_score,
            "critical": self.crt_score,
        })
        .to_string()
    }
}
