pub mod config;
pub mod global_session_manager;
pub mod handlers;
pub mod memory_session_store;
pub mod models;
pub mod routes;
pub mod services;
