use crate::errors::GradeError;
use crate::essay;
use crate::grader::GraderService;
use crate::model::GradingResult;

/// One grading call, end to end: canonicalize → prompt → model call →
/// unwrap → validate → project. Each stage either yields the next value or
/// aborts with a typed error; nothing partially validated leaves this
/// function.
pub(crate) async fn grade_impl(
    svc: &GraderService,
    raw_essay: &str,
) -> Result<GradingResult, GradeError> {
    let canonical = essay::normalize(raw_essay);
    let prompt = super::prompt::build_prompt_impl(&canonical);

    tracing::debug!(
        provider = %svc.config.provider,
        model = %svc.config.model,
        essay_chars = canonical.chars().count(),
        "requesting rubric grading"
    );

    let reply = svc
        .client
        .complete(&prompt, None)
        .await
        .map_err(GradeError::Provider)?;

    let unwrapped = super::unwrap::unwrap_response_impl(&reply.text)?;
    let validated = super::validate::validate_impl(&unwrapped)?;

    tracing::debug!(
        scientific = validated.scores.scientific_knowledge,
        critical = validated.scores.critical_thinking,
        "grading reply validated"
    );

    Ok(validated.into_result())
}
