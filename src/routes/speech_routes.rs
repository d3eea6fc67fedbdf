use actix_web::{post, web, Responder};
use serde_json::Value;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(speech);
}

#[post("/speech")]
async fn speech(
    data: web::Data<crate::routes::app_state::AppState>,
    req_body: web::Json<Value>,
) -> impl Responder {
    crate::handlers::speech_handler::handle_speech_request(data, req_body).await
}
