pub mod turn;
pub mod user_session;
