use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::config;
use crate::models::turn::Turn;
use crate::services::prompt_service::format_history;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Request to model API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Model API returned {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Model API returned no usable response text")]
    EmptyResponse,
}

/// Seam for the remote model so chat processing can be tested without the
/// network.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

// Wire types for the generateContent endpoint.

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Client for Google's generative-language API. Every call starts a fresh
/// remote exchange; the full transcript travels in the single message, so
/// the remote service's own history tracking is never used.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(GeminiClient {
            http,
            api_key,
            model: config::MODEL_NAME.to_string(),
        })
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let url = config::generate_content_url(&self.model, &self.api_key);
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        info!("Sending prompt ({} chars) to model {}", prompt.len(), self.model);
        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Auth failures, quota and rate limits all land here; none are
            // retried, the turn is simply aborted.
            let detail = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status: status.as_u16(), detail });
        }

        let body: GenerateContentResponse = response.json().await?;
        debug!("Model returned {} candidate(s)", body.candidates.len());

        // Concatenate every text chunk of the first candidate into one
        // string; nothing is surfaced until all chunks are in hand.
        let message: String = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();

        if message.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(message)
    }
}

/// Formats the transcript (system prompt, prior turns, new message) and asks
/// the model for the next assistant message.
pub async fn generate_response(
    msg: &str,
    history: &[Turn],
    system_prompt: &str,
    model: &dyn ChatModel,
) -> Result<String, LlmError> {
    let formatted_prompt = format_history(msg, history, system_prompt);
    model.generate(&formatted_prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_content_request_serializes_single_user_message() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: "SP\nUser: hello".to_string() }],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "SP\nUser: hello");
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_response_chunks_concatenate() {
        let payload = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello" }, { "text": ", world" }] }
            }]
        });
        let body: GenerateContentResponse = serde_json::from_value(payload).unwrap();
        let message: String = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(message, "Hello, world");
    }

    #[test]
    fn test_empty_candidates_deserialize() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(body.candidates.is_empty());
    }
}
