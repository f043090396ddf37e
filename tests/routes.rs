//! Router tests driven through `tower::ServiceExt::oneshot` with a scripted
//! transport, so no network is involved.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use http_playground::composer::{Composer, ComposerAction};
use http_playground::dispatch::{
    DispatchRequest, Transport, TransportCode, TransportFailure, TransportResponse,
};
use http_playground::{router, AppState};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

type SendResult = Result<TransportResponse, TransportFailure>;

struct ScriptedTransport {
    result: SendResult,
    seen: Mutex<Vec<DispatchRequest>>,
}

impl Transport for ScriptedTransport {
    fn send(
        &self,
        request: DispatchRequest,
    ) -> Pin<Box<dyn Future<Output = SendResult> + Send + '_>> {
        self.seen.lock().unwrap().push(request);
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

fn ok_transport() -> Arc<ScriptedTransport> {
    Arc::new(ScriptedTransport {
        result: Ok(TransportResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: HashMap::from([("content-type".to_string(), "application/json".to_string())]),
            body: json!({"ok": true}),
        }),
        seen: Mutex::new(Vec::new()),
    })
}

/// Never answers the first send; answers later ones with 200.
struct StallsOnceTransport {
    stalled: AtomicBool,
}

impl Transport for StallsOnceTransport {
    fn send(
        &self,
        _request: DispatchRequest,
    ) -> Pin<Box<dyn Future<Output = SendResult> + Send + '_>> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            return Box::pin(std::future::pending());
        }
        Box::pin(async {
            Ok(TransportResponse {
                status: 200,
                status_text: "OK".to_string(),
                headers: HashMap::new(),
                body: json!({"ok": true}),
            })
        })
    }
}

fn app_with(composer: Composer, transport: Arc<ScriptedTransport>) -> (Router, Arc<AppState>) {
    let state = AppState::shared(composer, transport);
    (router(state.clone()), state)
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app_with(Composer::default(), ok_transport());
    let (status, body) = call(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn presets_list_methods_and_proxies() {
    let (app, _) = app_with(Composer::default(), ok_transport());
    let (_, body) = call(&app, "GET", "/api/presets", None).await;
    assert_eq!(body["methods"].as_array().unwrap().len(), 7);
    assert_eq!(body["quick_urls"][0]["label"], "httpbin.org");
    assert_eq!(body["proxies"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn actions_update_composer_state() {
    let (app, state) = app_with(Composer::default(), ok_transport());

    let (status, body) = call(
        &app,
        "POST",
        "/api/composer/actions",
        Some(json!({"type": "add_header"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["request"]["headers"].as_array().unwrap().len(), 2);

    call(
        &app,
        "POST",
        "/api/composer/actions",
        Some(json!({"type": "set_method", "method": "PATCH"})),
    )
    .await;
    call(
        &app,
        "POST",
        "/api/composer/actions",
        Some(json!({"type": "set_timeout", "value": "100000"})),
    )
    .await;

    let (_, body) = call(&app, "GET", "/api/composer", None).await;
    assert_eq!(body["request"]["method"], "PATCH");
    assert_eq!(body["request"]["timeout"], 30000);
    assert_eq!(state.composer.lock().await.request.headers.len(), 2);
}

#[tokio::test]
async fn unknown_action_is_rejected() {
    let (app, _) = app_with(Composer::default(), ok_transport());
    let (status, _) = call(
        &app,
        "POST",
        "/api/composer/actions",
        Some(json!({"type": "send_finished"})),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn send_renders_exchange_and_stores_it() {
    let transport = ok_transport();
    let (app, state) = app_with(Composer::default(), transport.clone());

    let (status, body) = call(&app, "POST", "/api/send", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exchange"]["outcome"]["kind"], "success");
    assert_eq!(body["exchange"]["outcome"]["data"], json!({"ok": true}));
    assert!(body["html"].as_str().unwrap().contains("Response Body"));

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].url, "https://jsonplaceholder.typicode.com/posts/1");
    drop(seen);

    let composer = state.composer.lock().await;
    assert!(!composer.loading);
    assert!(composer.last_exchange.is_some());
}

#[tokio::test]
async fn send_failure_carries_classified_error() {
    let transport = Arc::new(ScriptedTransport {
        result: Err(TransportFailure::new(
            TransportCode::ConnectionFailed,
            "error sending request",
        )),
        seen: Mutex::new(Vec::new()),
    });
    let (app, _) = app_with(Composer::default(), transport);

    let (status, body) = call(&app, "POST", "/api/send", None).await;
    assert_eq!(status, StatusCode::OK);
    let outcome = &body["exchange"]["outcome"];
    assert_eq!(outcome["kind"], "failure");
    assert_eq!(outcome["status"], 0);
    assert_eq!(outcome["error"]["category"], "NetworkError");
    assert_eq!(outcome["error"]["code"], "CONNECTION_FAILED");
    assert!(body["html"].as_str().unwrap().contains("Network Error"));
}

#[tokio::test]
async fn send_while_loading_conflicts() {
    let mut composer = Composer::default();
    composer.apply(ComposerAction::SendStarted);
    let transport = ok_transport();
    let (app, _) = app_with(composer, transport.clone());

    let (status, body) = call(&app, "POST", "/api/send", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "REQUEST_IN_FLIGHT");
    assert!(transport.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn abandoned_send_does_not_block_the_next_one() {
    let transport = Arc::new(StallsOnceTransport {
        stalled: AtomicBool::new(false),
    });
    let state = AppState::shared(Composer::default(), transport);
    let app = router(state.clone());

    let first = app.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/send")
            .body(Body::empty())
            .unwrap(),
    );
    assert!(tokio::time::timeout(Duration::from_millis(100), first)
        .await
        .is_err());
    assert!(!state.composer.lock().await.loading);

    let (status, body) = call(&app, "POST", "/api/send", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exchange"]["outcome"]["kind"], "success");
    assert!(!state.composer.lock().await.loading);
}

#[tokio::test]
async fn send_with_empty_url_is_rejected() {
    let mut composer = Composer::default();
    composer.apply(ComposerAction::SetUrl { url: String::new() });
    let (app, _) = app_with(composer, ok_transport());

    let (status, body) = call(&app, "POST", "/api/send", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "EMPTY_URL");
}

#[tokio::test]
async fn unknown_paths_serve_the_page() {
    let (app, _) = app_with(Composer::default(), ok_transport());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html"
    );
}
