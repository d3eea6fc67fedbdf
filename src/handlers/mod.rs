pub mod chat_handler;
pub mod session_handler;
pub mod speech_handler;
