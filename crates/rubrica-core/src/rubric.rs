use std::fmt;

/// One of the two fixed rubric axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    ScientificKnowledge,
    CriticalThinking,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::ScientificKnowledge, Dimension::CriticalThinking];

    /// Key name used in the model's JSON reply.
    pub fn wire_key(self) -> &'static str {
        match self {
            Dimension::ScientificKnowledge => "scientificKnowledge",
            Dimension::CriticalThinking => "criticalThinking",
        }
    }

    /// Short key name used in the projected result and persisted rows.
    pub fn result_key(self) -> &'static str {
        match self {
            Dimension::ScientificKnowledge => "scientific",
            Dimension::CriticalThinking => "critical",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_key())
    }
}

/// Inclusive score range every normalized score must land in.
pub const SCORE_MIN: i64 = 1;
pub const SCORE_MAX: i64 = 10;

/// Minimum number of rationales (and paired key sentences) per dimension.
pub const MIN_RATIONALES: usize = 2;

/// Grading criteria embedded verbatim into every prompt. The rater persona,
/// the anti-inflation instruction and the clause-nominalized answer style
/// ("~함" endings) are part of the grading contract, so this text is fixed.
pub const RUBRIC_CRITERIA: &str = r#"[역할]
당신은 엄격하고 비판적인 대학 수준의 평가자입니다.
학생의 에세이를 논리적 정합성과 과학적 정확성에 기반하여 냉정하게 평가하십시오.
점수 인플레이션을 경계하고, 깐깐하게 채점하십시오.

[답변 스타일 가이드]
평가 근거(rationales)는 구어체를 사용하지 마십시오.
'~함', '~임', '~부족함', '~타당함' 등 명사형 종결 어미(개조식)로 간결하게 작성하십시오.

각 항목은 1점(최하)부터 10점(최상) 사이의 정수로 평가하십시오.
점수를 매길 때는 아래 핵심 평가 요소를 종합적으로 고려하십시오.

[채점 기준표]

1. 수과학적 지식 (Scientific Knowledge)
    [핵심 평가 요소]
    - 개념 활용의 타당성: 원자력 발전 관련 과학 개념과 핵심 용어를 적절하고 다양하게 활용하여 장단점을 과학적으로 설명하는가?
    - 개념의 정확성(오개념 여부): 과학 개념을 정확히 이해하고 있는가? 과학적 오류가 없는가?
    - 설명의 구체성: 추상적 표현이 아닌 구체적 과학적 근거, 수치, 구조적 설명 등을 제시하는가?

2. 비판적 사고력 (Critical Thinking)
    [핵심 평가 요소]
    - 논리적 흐름: 서론 → 본론 → 결론 구조가 자연스럽고 모순이 없는가?
    - 인과관계의 타당성: 원인과 결과를 논리적으로 연결하고 있는가?
    - 근거의 충분성 및 반대 논거 고려: 주장을 지지하는 근거가 충분한가? 반대 가능성을 예상하고 대응 논리를 제시하는가?
    - 심층적 고찰: 경제성, 안전성, 환경성, 국가 상황 등 다양한 관점에서 검토하였는가?

각 항목은 반드시 독립적으로 평가하십시오."#;
