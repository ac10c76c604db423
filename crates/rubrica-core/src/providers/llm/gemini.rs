use super::LlmClient;
use crate::grader::GenerationConfig;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for Google's Gemini `generateContent` REST endpoint.
///
/// The API key and generation settings are injected at construction so the
/// grader can be tested with a substitute client; nothing here reads
/// process-global state except the explicit `from_env` constructor.
pub struct GeminiClient {
    pub model: String,
    api_key: String,
    generation: GenerationConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(model: String, api_key: String, generation: GenerationConfig) -> Self {
        Self {
            model,
            api_key,
            generation,
            client: reqwest::Client::new(),
        }
    }

    /// Reads the API key from `GEMINI_API_KEY`.
    pub fn from_env(model: String, generation: GenerationConfig) -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY is not set"))?;
        Ok(Self::new(model, api_key, generation))
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(
        &self,
        prompt: &str,
        system: Option<&[String]>,
    ) -> anyhow::Result<LlmResponse> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let mut body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": self.generation.temperature,
                "topK": self.generation.top_k,
                "topP": self.generation.top_p,
                "candidateCount": self.generation.candidate_count,
            }
        });

        if let Some(sys) = system {
            body["systemInstruction"] = json!({
                "parts": [{ "text": sys.join("\n") }]
            });
        }

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_else(|_| String::new());
            anyhow::bail!("Gemini API error (status {}): {}", status, error_text);
        }

        let reply: serde_json::Value = resp.json().await?;

        // Parse candidates[0].content.parts[0].text
        let text = reply
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Gemini API response missing candidate text"))?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: "gemini".to_string(),
            model: self.model.clone(),
            meta: json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
