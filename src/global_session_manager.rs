use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use crate::models::user_session::UserSession;

/// Process-wide registry of conversation state, keyed by the session id
/// stored in the browser cookie. Sessions live only as long as the process.
#[derive(Clone)]
pub struct GlobalSessionManager {
    sessions: Arc<Mutex<HashMap<String, UserSession>>>,
}

impl GlobalSessionManager {
    pub fn new() -> Self {
        GlobalSessionManager {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Inserts or replaces the session under the given id.
    pub fn insert(&self, session_id: String, session: UserSession) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session_id, session);
    }

    /// Returns a clone of the session if it exists. Callers mutate the clone
    /// and write it back with `insert`.
    pub fn get(&self, session_id: &str) -> Option<UserSession> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(session_id).cloned()
    }

    pub fn contains(&self, session_id: &str) -> bool {
        let sessions = self.sessions.lock().unwrap();
        sessions.contains_key(session_id)
    }
}

impl Default for GlobalSessionManager {
    fn default() -> Self {
        Self::new()
    }
}
