use actix_files::Files;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::{middleware::Logger, web, App, HttpServer};
use AdvocateChatAgent::config;
use AdvocateChatAgent::global_session_manager::GlobalSessionManager;
use AdvocateChatAgent::memory_session_store::MemorySessionStore;
use AdvocateChatAgent::routes;
use AdvocateChatAgent::routes::app_state::AppState;
use AdvocateChatAgent::services::llm_service::GeminiClient;
use AdvocateChatAgent::services::speech_service::GoogleSpeechClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    config::init_logging();

    // Missing API key halts the process before any listener is bound; no
    // remote call ever happens without it.
    let api_key = match config::gemini_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        model: GeminiClient::new(api_key.clone())?,
        recognizer: GoogleSpeechClient::new(api_key)?,
        session_manager: GlobalSessionManager::new(),
    };

    let session_store = MemorySessionStore::new();
    let secret_key = Key::generate();

    let (host, port) = config::bind_address();
    log::info!("Starting server on http://{}:{}", host, port);
    HttpServer::new(move || {
        App::new()
            // Use the Logger middleware to log incoming requests.
            .wrap(Logger::default())
            .wrap(
                SessionMiddleware::builder(session_store.clone(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(web::Data::new(state.clone()))
            .configure(routes::session_routes::init_routes)
            .configure(routes::chat_routes::init_routes)
            .configure(routes::speech_routes::init_routes)
            // Serve static files (including index.html) from the "./static" directory.
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
