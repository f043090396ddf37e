pub mod composer;
pub mod health;
pub mod send;
pub mod static_files;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::composer::Composer;
use crate::dispatch::Transport;

/// Server-wide state. The composer mutex is the single writer for form state.
pub struct AppState {
    pub composer: Mutex<Composer>,
    pub transport: Arc<dyn Transport>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn shared(composer: Composer, transport: Arc<dyn Transport>) -> SharedState {
        Arc::new(Self {
            composer: Mutex::new(composer),
            transport,
        })
    }
}

/// API routes plus the embedded page as fallback.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/presets", get(composer::presets))
        .route("/api/composer", get(composer::get_composer))
        .route("/api/composer/actions", post(composer::apply_action))
        .route("/api/send", post(send::send_request))
        .fallback(static_files::serve_static)
        .with_state(state)
}
