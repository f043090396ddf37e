//! Request preparation and execution.
//!
//! [`prepare`] turns a snapshot of the composer into a [`DispatchRequest`]
//! without touching the network. [`execute`] sends it through a
//! [`Transport`], times it, and turns the result into a [`DispatchOutcome`],
//! classifying failures on the way.

use serde_json::Value;

use super::headers::{browser_headers, merge_headers};
use super::service::Transport;
use super::types::*;
use crate::classify::{classify, FailureSignal};
use crate::composer::{HttpMethod, ProxySettings, RequestConfig};
use crate::shared::Stopwatch;

/// Final URL: the proxy prefix concatenated with the target when the proxy is
/// enabled, the target verbatim otherwise. No encoding is applied.
pub fn resolve_url(url: &str, proxy: &ProxySettings) -> String {
    if proxy.enabled {
        format!("{}{}", proxy.url, url)
    } else {
        url.to_string()
    }
}

/// Body to send, if any. Only POST, PUT and PATCH with non-empty text carry a
/// body; text that is not valid JSON is sent as-is.
pub fn resolve_body(method: HttpMethod, body: &str) -> Option<RequestBody> {
    if !method.carries_body() || body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(json) => Some(RequestBody::Json(json)),
        Err(_) => Some(RequestBody::Text(body.to_string())),
    }
}

/// Builds the request descriptor for a composer snapshot.
pub fn prepare(config: &RequestConfig, proxy: &ProxySettings) -> DispatchRequest {
    DispatchRequest {
        method: config.method,
        url: resolve_url(&config.url, proxy),
        headers: merge_headers(&browser_headers(), &config.headers, config.method),
        body: resolve_body(config.method, &config.body),
        timeout_ms: config.timeout,
    }
}

/// Sends `request` once and reports the outcome. Never retries.
pub async fn execute<T>(transport: &T, request: DispatchRequest) -> DispatchOutcome
where
    T: Transport + ?Sized,
{
    let timeout_ms = request.timeout_ms;
    let watch = Stopwatch::start();
    let result = transport.send(request).await;
    let duration_ms = watch.elapsed_ms();

    match result {
        Ok(response) => DispatchOutcome::Success {
            data: response.body,
            status: response.status,
            status_text: response.status_text,
            headers: response.headers,
            duration_ms,
        },
        Err(failure) => {
            let error = classify(&FailureSignal::from_failure(&failure, timeout_ms));
            tracing::warn!(
                category = ?error.category,
                code = error.code.as_deref().unwrap_or(""),
                message = %error.message,
                duration_ms,
                "Request failed"
            );

            match failure.response {
                Some(response) => DispatchOutcome::Failure {
                    data: partial_data(response.body),
                    status: response.status,
                    status_text: response.status_text,
                    headers: response.headers,
                    duration_ms,
                    error,
                },
                None => DispatchOutcome::Failure {
                    data: Value::Null,
                    status: 0,
                    status_text: "Error".to_string(),
                    headers: Default::default(),
                    duration_ms,
                    error,
                },
            }
        }
    }
}

/// Prepares and executes in one go, returning the full exchange.
pub async fn dispatch<T>(transport: &T, config: &RequestConfig, proxy: &ProxySettings) -> Exchange
where
    T: Transport + ?Sized,
{
    let request = prepare(config, proxy);
    let url = request.url.clone();
    let request_headers = request.headers.clone();

    tracing::debug!(method = %request.method, url = %url, "Dispatching request");
    let outcome = execute(transport, request).await;

    Exchange {
        url,
        request_headers,
        outcome,
    }
}

// an empty failure body renders as null
fn partial_data(body: Value) -> Value {
    match body {
        Value::String(s) if s.is_empty() => Value::Null,
        other => other,
    }
}
