use axum::{extract::State, Json};
use serde::Serialize;

use super::SharedState;
use crate::composer::ComposerAction;
use crate::dispatch::{dispatch, Exchange};
use crate::error::AppError;
use crate::render::exchange_html;

#[derive(Debug, Serialize)]
pub struct SendResponse {
    pub exchange: Exchange,
    /// Rendered response panel
    pub html: String,
}

/// Clears the loading flag when a send is dropped before its outcome is
/// stored, e.g. when the client disconnects mid-request.
struct InFlight {
    state: SharedState,
    done: bool,
}

impl InFlight {
    fn new(state: SharedState) -> Self {
        Self { state, done: false }
    }

    async fn finish(mut self, exchange: Exchange) {
        self.state
            .composer
            .lock()
            .await
            .apply(ComposerAction::SendFinished {
                exchange: Box::new(exchange),
            });
        self.done = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        tracing::debug!("Send dropped before completion");

        match self.state.composer.try_lock() {
            Ok(mut composer) => composer.apply(ComposerAction::SendCancelled),
            Err(_) => {
                let Ok(handle) = tokio::runtime::Handle::try_current() else {
                    return;
                };
                let state = self.state.clone();
                handle.spawn(async move {
                    state
                        .composer
                        .lock()
                        .await
                        .apply(ComposerAction::SendCancelled);
                });
            }
        }
    }
}

/// Sends the composer's current request.
///
/// The composer is snapshotted and marked loading under the lock; the lock is
/// released for the network call so edits keep flowing.
pub async fn send_request(State(state): State<SharedState>) -> Result<Json<SendResponse>, AppError> {
    let (request, proxy) = {
        let mut composer = state.composer.lock().await;
        if !composer.can_send() {
            return Err(if composer.loading {
                AppError::RequestInFlight
            } else {
                AppError::EmptyUrl
            });
        }
        composer.apply(ComposerAction::SendStarted);
        (composer.request.clone(), composer.proxy.clone())
    };
    let in_flight = InFlight::new(state.clone());

    let exchange = dispatch(state.transport.as_ref(), &request, &proxy).await;

    if exchange.outcome.is_success() {
        tracing::debug!(
            status = exchange.outcome.status(),
            duration_ms = exchange.outcome.duration_ms(),
            "Request succeeded"
        );
    }

    let html = exchange_html(&exchange);
    in_flight.finish(exchange.clone()).await;

    Ok(Json(SendResponse { exchange, html }))
}
