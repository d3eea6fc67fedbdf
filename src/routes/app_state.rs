use crate::global_session_manager::GlobalSessionManager;
use crate::services::llm_service::GeminiClient;
use crate::services::speech_service::GoogleSpeechClient;

#[derive(Clone)]
pub struct AppState {
    pub model: GeminiClient,
    pub recognizer: GoogleSpeechClient,
    pub session_manager: GlobalSessionManager,
}
