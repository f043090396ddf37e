use axum::{extract::State, Json};

use super::SharedState;
use crate::composer::{Composer, ComposerAction, Presets};

pub async fn get_composer(State(state): State<SharedState>) -> Json<Composer> {
    Json(state.composer.lock().await.clone())
}

pub async fn apply_action(
    State(state): State<SharedState>,
    Json(action): Json<ComposerAction>,
) -> Json<Composer> {
    tracing::debug!(action = action.name(), "Applying composer action");

    let mut composer = state.composer.lock().await;
    composer.apply(action);
    Json(composer.clone())
}

pub async fn presets() -> Json<Presets> {
    Json(Presets::new())
}
