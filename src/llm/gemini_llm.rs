use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::llm_interface::{GenerativeModel, LLMError};

/// Gemini `generateContent` client for a single model and key.
pub struct GeminiLLM {
    client: Client,
    base_url: String,
    model: String,
    api_key: HeaderValue,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
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
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GeminiLLM {
    pub fn new(client: Client, base_url: &str, model: &str, api_key: &str) -> Result<Self, LLMError> {
        if api_key.trim().is_empty() {
            return Err(LLMError::Init("API key must not be empty".to_string()));
        }
        let mut api_key = HeaderValue::from_str(api_key)
            .map_err(|_| LLMError::Init("API key contains characters not allowed in a header".to_string()))?;
        api_key.set_sensitive(true);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenerativeModel for GeminiLLM {
    async fn generate_content(&self, prompt: &str) -> Result<String, LLMError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Calling Gemini model {}", self.model);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::Invocation(format!("Request to Gemini failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LLMError::Invocation(format!("Failed to read Gemini response: {}", e)))?;

        if !status.is_success() {
            return Err(LLMError::Invocation(error_message(status, &text)));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| LLMError::Invocation(format!("Malformed Gemini response: {}", e)))?;
        extract_text(parsed)
    }
}

/// Prefer the provider's own message so the classifier sees its wording.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => format!("[{}] {}", status.as_u16(), envelope.error.message),
        Err(_) if body.trim().is_empty() => format!("Gemini returned HTTP {}", status.as_u16()),
        Err(_) => format!("Gemini returned HTTP {}: {}", status.as_u16(), body.trim()),
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, LLMError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(LLMError::Invocation(format!("Prompt was blocked: {}", reason)));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(LLMError::Invocation(format!(
            "Gemini returned no text (finish reason: {})",
            reason
        )));
    }
    Ok(text)
}
