use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use actix_session::storage::{LoadError, SaveError, SessionKey, SessionStore, UpdateError};
use actix_web::cookie::time::Duration;
use anyhow::anyhow;
use futures::FutureExt; // for .boxed()
use tokio::sync::Mutex;
use uuid::Uuid;

type SessionState = HashMap<String, String>;

// In-memory cookie session backing; clones share the same map so every
// server worker sees the same sessions. Chat history is volatile by design,
// so there is no external store behind this.
#[derive(Clone)]
pub struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, (SessionState, Instant)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        MemorySessionStore {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(
        &self,
        session_key: &SessionKey,
    ) -> impl Future<Output = Result<Option<SessionState>, LoadError>> {
        let key_str = session_key.as_ref().to_owned();
        async move {
            let mut sessions = self.sessions.lock().await;
            let now = Instant::now();
            // Drop anything past its TTL while we hold the lock.
            sessions.retain(|_, (_, expiry)| now < *expiry);
            Ok(sessions.get(&key_str).map(|(state, _)| state.clone()))
        }
        .boxed()
    }

    fn save(
        &self,
        session_state: SessionState,
        ttl: &Duration,
    ) -> impl Future<Output = Result<SessionKey, SaveError>> {
        let ttl = *ttl;
        async move {
            let mut sessions = self.sessions.lock().await;
            let key = Uuid::new_v4().to_string();
            let expiry = Instant::now() + ttl;
            sessions.insert(key.clone(), (session_state, expiry));
            SessionKey::try_from(key).map_err(|e| SaveError::Other(anyhow!(e)))
        }
        .boxed()
    }

    fn update(
        &self,
        session_key: SessionKey,
        session_state: SessionState,
        ttl: &Duration,
    ) -> impl Future<Output = Result<SessionKey, UpdateError>> {
        let ttl = *ttl;
        let key_str = session_key.as_ref().to_owned();
        async move {
            let mut sessions = self.sessions.lock().await;
            let expiry = Instant::now() + ttl;
            sessions.insert(key_str, (session_state, expiry));
            Ok(session_key)
        }
        .boxed()
    }

    fn update_ttl(
        &self,
        session_key: &SessionKey,
        ttl: &Duration,
    ) -> impl Future<Output = Result<(), anyhow::Error>> {
        let ttl = *ttl;
        let key_str = session_key.as_ref().to_owned();
        async move {
            let mut sessions = self.sessions.lock().await;
            match sessions.get_mut(&key_str) {
                Some((_, expiry)) => {
                    *expiry = Instant::now() + ttl;
                    Ok(())
                }
                None => Err(anyhow!("Session not found")),
            }
        }
        .boxed()
    }

    fn delete(
        &self,
        session_key: &SessionKey,
    ) -> impl Future<Output = Result<(), anyhow::Error>> {
        let key_str = session_key.as_ref().to_owned();
        async move {
            let mut sessions = self.sessions.lock().await;
            sessions.remove(&key_str);
            Ok(())
        }
        .boxed()
    }
}
