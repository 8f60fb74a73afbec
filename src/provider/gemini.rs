//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::foundation::error::{PageforgeError, PageforgeResult};
use crate::provider::ContentProvider;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;

/// HTTP client for the Gemini generate-content endpoint.
pub struct GeminiProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    temperature: f64,
    max_output_tokens: u32,
}

impl GeminiProvider {
    /// Provider against the public API with [`DEFAULT_MODEL`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Provider against the public API with an explicit model name.
    pub fn with_model(api_key: impl Into<String>, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{API_BASE}/{model}:generateContent"),
            api_key: api_key.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// Point the provider at a different endpoint (proxies, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sampling temperature for generation.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl ContentProvider for GeminiProvider {
    #[tracing::instrument(skip_all)]
    async fn generate(&self, prompt: &str) -> PageforgeResult<String> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| PageforgeError::provider(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            warn!(status = status.as_u16(), "content provider request failed");
            return Err(PageforgeError::provider(message));
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|err| PageforgeError::provider(err.to_string()))?;
        Ok(flatten_reply(&decoded))
    }

    fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CandidateContent {
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReplyPart {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorDetail {
    message: String,
}

/// Join the first candidate's part texts with newlines. Empty or partless
/// responses flatten to an empty string, which downstream payload extraction
/// then rejects.
fn flatten_reply(response: &GenerateResponse) -> String {
    response
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
}

/// Message to surface for a non-success response: the structured
/// `error.message` when the body carries one, otherwise the HTTP status text.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|decoded| decoded.error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_owned)
                .unwrap_or_else(|| status.to_string())
        })
}
