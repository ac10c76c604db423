use crate::rubric;

/// JSON shape the model must reply with. Kept as a literal example because
/// the contract is "follow this structure exactly", not a formal schema.
const OUTPUT_SCHEMA: &str = r#"{
  "scores": {
    "scientificKnowledge": 1~10 사이의 정수,
    "criticalThinking": 1~10 사이의 정수
  },
  "rationales": {
    "scientificKnowledge": ["근거1", "근거2"],
    "criticalThinking": ["근거1", "근거2"]
  },
  "keySentences": {
    "scientificKnowledge": ["문장1", "문장2"],
    "criticalThinking": ["문장1", "문장2"]
  }
}"#;

/// Builds the full grading prompt for an already-canonicalized essay.
///
/// Pure: the same essay always yields the same prompt, which is what makes
/// the deterministic-sampling configuration meaningful.
pub(crate) fn build_prompt_impl(canonical_essay: &str) -> String {
    format!(
        "당신은 전문 교육 조교입니다.\n\
         아래 학생 글을 평가하세요.\n\n\
         {criteria}\n\n\
         ⚠️`keySentences`는 반드시 학생 글에 있는 문장을 **토씨 하나 틀리지 않고 그대로(Exact Match)** 가져와야 합니다.\n\
         ⚠️`rationales`는 위에서 정의한 **'~함' 체**로 간결하게 작성하십시오.\n\
         ⚠️ 반드시 아래 JSON 스키마를 정확히 따르시오.\n\
         ⚠️ 키 이름, 중첩 구조, 배열 형태를 절대 변경하지 마시오.\n\
         ⚠️ JSON 외 텍스트가 있으면 오류로 간주됨.\n\n\
         출력 JSON 스키마 (예시 형식 그대로 유지):\n\n\
         {schema}\n\n\
         학생 글:\n\
         ---\n\
         {essay}\n\
         ---",
        criteria = rubric::RUBRIC_CRITERIA,
        schema = OUTPUT_SCHEMA,
        essay = canonical_essay,
    )
}
