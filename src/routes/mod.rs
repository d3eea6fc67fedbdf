pub mod app_state;
pub mod chat_routes;
pub mod session_routes;
pub mod speech_routes;
