use actix_web::{web, HttpResponse};
use actix_session::Session;
use serde_json::Value;
use log::{error, info, warn};
use crate::config;
use crate::routes::app_state::AppState;
use crate::services::chat_service;

pub async fn handle_chat_request(
    data: web::Data<AppState>,
    session: Session,
    req_body: web::Json<Value>,
) -> HttpResponse {
    // Retrieve session_id from cookie (or fallback)
    let session_id = if let Ok(Some(id)) = session.get::<String>("session_id") {
        id
    } else {
        warn!("No valid session_id found in cookie; falling back to request body");
        req_body["session_id"].as_str().unwrap_or_default().to_string()
    };

    let Some(mut user_session) = data.session_manager.get(&session_id) else {
        error!("Session \"{}\" not found!", session_id);
        return HttpResponse::InternalServerError()
            .json(serde_json::json!({"error": "Session not initialized"}));
    };

    let user_input = req_body["message"].as_str().unwrap_or_default().to_string();
    // The system prompt travels with every request; it is never stored
    // per-turn.
    let system_prompt = req_body["system_prompt"]
        .as_str()
        .unwrap_or(config::DEFAULT_SYSTEM_PROMPT)
        .to_string();
    info!("Processing message for session {}: {}", session_id, user_input);

    match chat_service::process_chat(&user_input, &system_prompt, &mut user_session, &data.model).await {
        Ok(response_content) => {
            // Update the session after processing
            let history = serde_json::to_value(&user_session.history).unwrap_or(Value::Null);
            data.session_manager.insert(session_id.clone(), user_session);
            HttpResponse::Ok().json(serde_json::json!({
                "response": response_content,
                "history": history,
            }))
        }
        Err(e) => {
            error!("Error processing chat for session {}: {:?}", session_id, e);
            // The turn stays in history with its empty assistant slot; the
            // aborted request changes nothing else.
            data.session_manager.insert(session_id.clone(), user_session);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": "Chat processing failed"}))
        }
    }
}
