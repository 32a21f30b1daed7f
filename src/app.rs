use axum::{Router, extract::DefaultBodyLimit, routing::get};

use crate::handlers::{create_log_handler, get_call_log_handler, list_call_logs_handler};

/// Path the voice agent platform posts call logs to.
pub const CREATE_LOG_METHOD_PATH: &str = "/api/method/voice_ai_platform.api.voice_log.create_log";

/// Body limit for the ingest routes. Transcripts can run long.
pub const INGEST_BODY_LIMIT: usize = 32 * 1024 * 1024;

pub struct App;

impl App {
    pub fn new() -> Self {
        Self
    }

    pub fn router(self) -> Router {
        let create_log = get(create_log_handler)
            .post(create_log_handler)
            .layer(DefaultBodyLimit::max(INGEST_BODY_LIMIT));

        Router::new()
            .route("/", get(|| async { "Hello, World!" }))
            .route("/api/log", create_log.clone())
            .route(CREATE_LOG_METHOD_PATH, create_log)
            .route("/api/call-logs", get(list_call_logs_handler))
            .route("/api/call-logs/{name}", get(get_call_log_handler))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
