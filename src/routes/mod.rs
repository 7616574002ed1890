use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::Method,
    routing::{any, get},
};
use folio_notification::Mailer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

mod contact;
mod health;

/// Largest request body the relay will buffer.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    /// Provider handle shared by every request; built once at startup.
    pub mailer: Arc<dyn Mailer>,
    pub contact_address: String,
}

impl AppState {
    pub fn new(mailer: impl Mailer, contact_address: impl Into<String>) -> Self {
        Self {
            mailer: Arc::new(mailer),
            contact_address: contact_address.into(),
        }
    }
}

pub fn router(app_state: AppState, send_email_path: &str) -> Router {
    // The form is served from another origin than the relay
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // Health check endpoint
        .route("/health", get(health::health))
        .route(send_email_path, any(contact::action))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
