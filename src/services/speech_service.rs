use std::time::Duration;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Request to speech API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Speech API returned {status}: {detail}")]
    Api { status: u16, detail: String },
}

/// Seam for the remote recognition service. `Ok(None)` means the service
/// answered but could not make out any words.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, audio: &[u8]) -> Result<Option<String>, SpeechError>;
}

// Wire types for the speech:recognize endpoint.

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    encoding: String,
    sample_rate_hertz: u32,
    language_code: String,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize, Debug)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize, Debug)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize, Debug)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

/// Client for Google's speech-to-text API. One call per recording cycle,
/// audio in, text or error out.
#[derive(Clone)]
pub struct GoogleSpeechClient {
    http: reqwest::Client,
    api_key: String,
}

impl GoogleSpeechClient {
    pub fn new(api_key: String) -> Result<Self, SpeechError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(GoogleSpeechClient { http, api_key })
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechClient {
    async fn recognize(&self, audio: &[u8]) -> Result<Option<String>, SpeechError> {
        let url = config::speech_recognize_url(&self.api_key);
        let request = RecognizeRequest {
            config: RecognitionConfig {
                // Browser MediaRecorder output.
                encoding: "WEBM_OPUS".to_string(),
                sample_rate_hertz: 48_000,
                language_code: "en-US".to_string(),
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(audio),
            },
        };

        info!("Submitting {} bytes of audio for recognition", audio.len());
        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api { status: status.as_u16(), detail });
        }

        let body: RecognizeResponse = response.json().await?;
        let transcript = body
            .results
            .first()
            .and_then(|r| r.alternatives.first())
            .map(|a| a.transcript.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(transcript)
    }
}

/// Result of one capture cycle as shown to the UI. Both failure kinds come
/// back as an empty transcript plus a status line; the caller treats empty
/// text as "no input" and skips the model call.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transcription {
    pub text: String,
    pub status: String,
    pub recognized: bool,
}

/// Submits captured audio and folds the three possible outcomes into a
/// `Transcription`. Never returns an error; recognition failure is a normal
/// outcome the user retries by recording again.
pub async fn transcribe(audio: &[u8], recognizer: &dyn SpeechRecognizer) -> Transcription {
    match recognizer.recognize(audio).await {
        Ok(Some(text)) => Transcription {
            status: format!("You said: {}", text),
            text,
            recognized: true,
        },
        Ok(None) => {
            warn!("Recognition service could not understand the audio");
            Transcription {
                text: String::new(),
                status: "Could not understand audio".to_string(),
                recognized: false,
            }
        }
        Err(e) => {
            warn!("Recognition request failed: {}", e);
            Transcription {
                text: String::new(),
                status: format!("Could not request results; {}", e),
                recognized: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRecognizer(Result<Option<String>, SpeechError>);

    #[async_trait]
    impl SpeechRecognizer for FixedRecognizer {
        async fn recognize(&self, _audio: &[u8]) -> Result<Option<String>, SpeechError> {
            match &self.0 {
                Ok(t) => Ok(t.clone()),
                Err(SpeechError::Api { status, detail }) => Err(SpeechError::Api {
                    status: *status,
                    detail: detail.clone(),
                }),
                Err(SpeechError::Transport(_)) => unreachable!("not constructed in tests"),
            }
        }
    }

    #[tokio::test]
    async fn test_recognized_audio_returns_text() {
        let recognizer = FixedRecognizer(Ok(Some("hello there".to_string())));
        let outcome = transcribe(b"audio", &recognizer).await;
        assert_eq!(outcome.text, "hello there");
        assert_eq!(outcome.status, "You said: hello there");
        assert!(outcome.recognized);
    }

    #[tokio::test]
    async fn test_unintelligible_audio_returns_empty_text() {
        let recognizer = FixedRecognizer(Ok(None));
        let outcome = transcribe(b"static noise", &recognizer).await;
        assert!(outcome.text.is_empty());
        assert_eq!(outcome.status, "Could not understand audio");
        assert!(!outcome.recognized);
    }

    #[tokio::test]
    async fn test_request_failure_returns_empty_text_with_detail() {
        let recognizer = FixedRecognizer(Err(SpeechError::Api {
            status: 403,
            detail: "quota exceeded".to_string(),
        }));
        let outcome = transcribe(b"audio", &recognizer).await;
        assert!(outcome.text.is_empty());
        assert!(outcome.status.starts_with("Could not request results;"));
        assert!(outcome.status.contains("quota exceeded"));
        assert!(!outcome.recognized);
    }

    #[test]
    fn test_recognize_response_parses_transcript() {
        let payload = serde_json::json!({
            "results": [{ "alternatives": [{ "transcript": " hello world " }] }]
        });
        let body: RecognizeResponse = serde_json::from_value(payload).unwrap();
        let transcript = body
            .results
            .first()
            .and_then(|r| r.alternatives.first())
            .map(|a| a.transcript.trim().to_string());
        assert_eq!(transcript.as_deref(), Some("hello world"));
    }

    #[test]
    fn test_empty_results_mean_not_understood() {
        let body: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(body.results.is_empty());
    }
}
