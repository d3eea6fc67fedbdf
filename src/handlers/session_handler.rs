use actix_web::web;
use actix_session::Session;
use uuid::Uuid;
use log::{error, info};
use serde_json::json;
use crate::routes::app_state::AppState;
use crate::models::user_session::UserSession;

pub async fn initialize_session(
    data: web::Data<AppState>,
    session: Session,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    // Reuse the conversation when the cookie already points at a live one.
    if let Ok(Some(existing_id)) = session.get::<String>("session_id") {
        if data.session_manager.contains(&existing_id) {
            info!("Session {} already initialized", existing_id);
            return Ok(json!({ "initialized": true, "session_id": existing_id }));
        }
    }

    let session_id = Uuid::new_v4().to_string();
    if let Err(e) = session.insert("session_id", session_id.clone()) {
        error!("Failed to insert session_id into cookie: {:?}", e);
    } else {
        info!("Stored session_id {} in cookie", session_id);
    }

    data.session_manager.insert(session_id.clone(), UserSession::new());
    info!("Initialized user session: {}", session_id);

    Ok(json!({ "initialized": true, "session_id": session_id }))
}
