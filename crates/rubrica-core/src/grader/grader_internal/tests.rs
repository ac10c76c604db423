use crate::errors::GradeError;
use crate::grader::{GraderConfig, GraderService};
use crate::model::LlmResponse;
use crate::providers::llm::LlmClient;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

struct MockLlmClient {
    responses: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    fn with_replies(replies: Vec<&str>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(replies.into_iter().map(String::from).collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(
        &self,
        prompt: &str,
        _system: Option<&[String]>,
    ) -> anyhow::Result<LlmResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut resps = self.responses.lock().unwrap();
        if resps.is_empty() {
            anyhow::bail!("No more mock responses");
        }
        let text = resps.remove(0);
        Ok(LlmResponse {
            text,
            provider: "mock".to_string(),
            model: "mock".to_string(),
            meta: serde_json::Value::Null,
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

fn service(client: Arc<MockLlmClient>) -> GraderService {
    GraderService::new(GraderConfig::default(), client)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const SCENARIO_REPLY: &str = concat!(
    "```json\n",
    r#"{"scores":{"scientificKnowledge":"7점","criticalThinking":5},"#,
    r#""rationales":{"scientificKnowledge":["a","b"],"criticalThinking":["c","d"]},"#,
    r#""keySentences":{"scientificKnowledge":["원자력은 안전하다.","x"],"criticalThinking":["y","z"]}}"#,
    "\n```"
);

#[tokio::test]
async fn grades_fenced_korean_reply_end_to_end() {
    let client = MockLlmClient::with_replies(vec![SCENARIO_REPLY]);
    let svc = service(client.clone());

    let result = svc.grade("원자력은 안전하다.").await.unwrap();

    assert_eq!(result.scores.scientific, 7);
    assert_eq!(result.scores.critical, 5);
    assert_eq!(result.rationales.scientific, vec!["a", "b"]);
    assert_eq!(result.rationales.critical, vec!["c", "d"]);
    assert_eq!(
        result.key_sentences.scientific,
        vec!["원자력은 안전하다.", "x"]
    );
    assert_eq!(result.key_sentences.critical, vec!["y", "z"]);

    // The prompt embeds the canonical essay as the subject text.
    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("원자력은 안전하다."));
}

#[tokio::test]
async fn fenced_and_unfenced_replies_validate_identically() {
    let inner = SCENARIO_REPLY
        .trim_start_matches("```json")
        .trim_end_matches("```")
        .trim()
        .to_string();

    let fenced = service(MockLlmClient::with_replies(vec![SCENARIO_REPLY]))
        .grade("essay")
        .await
        .unwrap();
    let unfenced = service(MockLlmClient::with_replies(vec![inner.as_str()]))
        .grade("essay")
        .await
        .unwrap();

    assert_eq!(fenced, unfenced);
}

#[tokio::test]
async fn crlf_essay_grades_like_lf_essay() {
    let client = MockLlmClient::with_replies(vec![SCENARIO_REPLY, SCENARIO_REPLY]);
    let svc = service(client.clone());

    svc.grade("원자력은\r\n안전하다.").await.unwrap();
    svc.grade("원자력은\n안전하다.").await.unwrap();

    let prompts = client.prompts.lock().unwrap();
    assert_eq!(prompts[0], prompts[1]);
}

#[tokio::test]
async fn empty_reply_fails_without_parsing() {
    for reply in ["", "   \n\t "] {
        let err = service(MockLlmClient::with_replies(vec![reply]))
            .grade("essay")
            .await
            .unwrap_err();
        assert!(matches!(err, GradeError::EmptyResponse), "{err}");
    }
}

#[tokio::test]
async fn malformed_reply_surfaces_raw_text() {
    init_tracing();
    let err = service(MockLlmClient::with_replies(vec![
        "Sure! Here is my assessment: 7/10",
    ]))
    .grade("essay")
    .await
    .unwrap_err();

    match err {
        GradeError::MalformedJson { raw, .. } => {
            assert_eq!(raw, "Sure! Here is my assessment: 7/10");
        }
        other => panic!("expected MalformedJson, got {other}"),
    }
}

#[tokio::test]
async fn fence_only_reply_fails_as_malformed_json() {
    let err = service(MockLlmClient::with_replies(vec!["```json\n```"]))
        .grade("essay")
        .await
        .unwrap_err();
    match err {
        GradeError::MalformedJson { raw, .. } => assert_eq!(raw, ""),
        other => panic!("expected MalformedJson, got {other}"),
    }
}

#[tokio::test]
async fn provider_failure_is_wrapped() {
    // Mock with no queued replies fails the completion call itself.
    let err = service(MockLlmClient::with_replies(vec![]))
        .grade("essay")
        .await
        .unwrap_err();
    assert!(matches!(err, GradeError::Provider(_)));
}

#[tokio::test]
async fn no_partial_result_on_late_validation_failure() {
    // Scores are fine, but one rationale list is short; the whole call
    // fails rather than salvaging the valid dimension.
    let reply = r#"{"scores":{"scientificKnowledge":9,"criticalThinking":9},
        "rationales":{"scientificKnowledge":["a","b"],"criticalThinking":["c"]},
        "keySentences":{"scientificKnowledge":["s","t"],"criticalThinking":["u"]}}"#;
    let err = service(MockLlmClient::with_replies(vec![reply]))
        .grade("essay")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GradeError::TooFewRationales(crate::rubric::Dimension::CriticalThinking)
    ));
}
