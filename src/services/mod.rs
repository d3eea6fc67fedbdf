pub mod chat_service;
pub mod llm_service;
pub mod prompt_service;
pub mod speech_service;
