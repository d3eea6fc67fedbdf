use serde::{Deserialize, Serialize};
use crate::models::turn::Turn;

/// Conversation state owned by one UI session. Held in memory only; it
/// disappears with the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSession {
    pub history: Vec<Turn>,
}

impl UserSession {
    pub fn new() -> Self {
        UserSession { history: Vec::new() }
    }
}
