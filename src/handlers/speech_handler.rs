use actix_web::{web, HttpResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::{info, warn};
use serde_json::Value;
use crate::routes::app_state::AppState;
use crate::services::speech_service;

/// Accepts one base64-encoded recording from the page and answers with the
/// transcription outcome. Recognition failures are normal outcomes (200 with
/// empty text and a status line), not server errors.
pub async fn handle_speech_request(
    data: web::Data<AppState>,
    req_body: web::Json<Value>,
) -> HttpResponse {
    let encoded = req_body["audio"].as_str().unwrap_or_default();
    let audio = match STANDARD.decode(encoded) {
        Ok(bytes) if !bytes.is_empty() => bytes,
        Ok(_) => {
            warn!("Speech request carried no audio data");
            return HttpResponse::BadRequest()
                .json(serde_json::json!({"error": "No audio data supplied"}));
        }
        Err(e) => {
            warn!("Failed to decode audio payload: {}", e);
            return HttpResponse::BadRequest()
                .json(serde_json::json!({"error": "Audio payload is not valid base64"}));
        }
    };

    info!("Received recording of {} bytes", audio.len());
    let outcome = speech_service::transcribe(&audio, &data.recognizer).await;
    HttpResponse::Ok().json(outcome)
}
