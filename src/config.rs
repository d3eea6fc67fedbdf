use std::env;

pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
}

pub const MODEL_NAME: &str = "gemini-1.5-pro-latest";

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
you are an experienced advocate that knows about every policy and can easily
list down the errors by seeing the policies given by users. Be professional and
polite to users while talking.";

const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
const GENERATIVE_LANGUAGE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const SPEECH_RECOGNIZE_URL: &str = "https://speech.googleapis.com/v1/speech:recognize";

const BIND_HOST: &str = "127.0.0.1";
const BIND_PORT: u16 = 8080;

pub fn bind_address() -> (String, u16) {
    (BIND_HOST.to_string(), BIND_PORT)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    MissingApiKey(String),
}

/// Reads the Gemini API key from the environment. An absent or empty key is
/// a fatal startup condition; no request is ever sent without it.
pub fn gemini_api_key() -> Result<String, ConfigError> {
    match env::var(GEMINI_API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingApiKey(GEMINI_API_KEY_VAR.to_string())),
    }
}

pub fn generate_content_url(model: &str, api_key: &str) -> String {
    format!("{}/{}:generateContent?key={}", GENERATIVE_LANGUAGE_URL, model, api_key)
}

pub fn speech_recognize_url(api_key: &str) -> String {
    format!("{}?key={}", SPEECH_RECOGNIZE_URL, api_key)
}
