use crate::errors::GradeError;

/// Trims the raw model reply and strips a markdown code fence if present.
///
/// Models regularly wrap the JSON in ```/```json fences despite being told
/// not to, so a leading fence marker triggers removal of every fence token
/// before the text is handed to the parser. An empty or whitespace-only
/// reply fails here, before any parse is attempted; a reply that is empty
/// only after fence stripping is not "nothing from the collaborator" and is
/// left for the parser to reject.
pub(crate) fn unwrap_response_impl(raw: &str) -> Result<String, GradeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(GradeError::EmptyResponse);
    }

    if text.starts_with("```") {
        let stripped = text.replace("```json", "").replace("```", "");
        return Ok(stripped.trim().to_string());
    }

    Ok(text.to_string())
}
