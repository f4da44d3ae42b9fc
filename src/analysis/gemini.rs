/// Gemini `generateContent` client
///
/// Sends one prompt plus one inline image and returns the text of the first
/// candidate. No retries and no client-side timeout.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::config::GeminiConfig;
use crate::error::AnalysisError;

/// Finish reasons that mean the candidate was withheld
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

// ========== Wire format ==========

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum Part<'a> {
    Text(&'a str),
    InlineData(InlineData<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    /// Base64 of the raw file bytes
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

// ========== Client ==========

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send `prompt` and the image bytes, returning the raw candidate text
    pub async fn generate(
        &self,
        prompt: &str,
        mime_type: &str,
        image_bytes: &[u8],
    ) -> Result<String, AnalysisError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AnalysisError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text(prompt),
                    Part::InlineData(InlineData {
                        mime_type,
                        data: STANDARD.encode(image_bytes),
                    }),
                ],
            }],
        };

        info!(
            "Sending {} byte {} image to {}",
            image_bytes.len(),
            mime_type,
            self.model
        );

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!("generateContent returned {} ({} bytes)", status, raw.len());

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &raw));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&raw)?;
        extract_text(parsed)
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Map a non-2xx response to an error, preferring the provider's message
fn api_error(status: u16, raw: &str) -> AnalysisError {
    let message = match serde_json::from_str::<ApiErrorBody>(raw) {
        Ok(body) => match body.error.status {
            Some(code) => format!("{} ({})", body.error.message, code),
            None => body.error.message,
        },
        Err(_) if raw.trim().is_empty() => "empty error body".to_string(),
        Err(_) => raw.trim().to_string(),
    };
    warn!("Gemini API error {}: {}", status, message);
    AnalysisError::Api { status, message }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: GenerateContentResponse) -> Result<String, AnalysisError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AnalysisError::Blocked { reason });
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(AnalysisError::EmptyResponse)?;

    if let Some(reason) = candidate
        .finish_reason
        .filter(|r| BLOCKING_FINISH_REASONS.contains(&r.as_str()))
    {
        return Err(AnalysisError::Blocked { reason });
    }

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }
    Ok(text)
}
