//! Response building utilities for the reqwest transport.
//!
//! Handles turning a `reqwest::Response` into a [`TransportResponse`],
//! including header collection, binary detection and body decoding, and maps
//! client errors onto [`TransportCode`]s.

use super::types::{TransportCode, TransportFailure, TransportResponse};
use crate::shared::status_text;
use base64::Engine;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error as StdError;

/// Determines if response body is likely binary based on content-type.
///
/// # Arguments
///
/// * `content_type` - The Content-Type header value
///
/// # Returns
///
/// `true` if the content is likely binary, `false` otherwise.
pub fn is_binary_content(content_type: Option<&str>) -> bool {
    let ct = match content_type {
        Some(ct) => ct.to_lowercase(),
        None => return false,
    };

    let text_types = [
        "text/",
        "application/json",
        "application/xml",
        "application/javascript",
        "application/x-javascript",
        "application/ecmascript",
        "application/x-www-form-urlencoded",
        "+json",
        "+xml",
    ];

    !text_types.iter().any(|t| ct.contains(t))
}

/// Decodes a buffered body into a JSON value.
///
/// Binary content becomes a base64 string. Text is parsed as JSON when
/// possible and kept as a string otherwise; an empty body is `""`.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Value {
    if bytes.is_empty() {
        return Value::String(String::new());
    }

    if is_binary_content(content_type) {
        return Value::String(base64::engine::general_purpose::STANDARD.encode(bytes));
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Collects response headers with lower-case names. Repeated headers are
/// joined with `, `.
pub fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}

/// Buffers a response in full.
pub async fn build_response(response: reqwest::Response) -> Result<TransportResponse, TransportFailure> {
    let status = response.status().as_u16();
    let headers = collect_headers(response.headers());
    let bytes = response.bytes().await.map_err(failure_from_reqwest)?;

    let content_type = headers.get("content-type").map(|s| s.as_str());
    let body = decode_body(&bytes, content_type);

    Ok(TransportResponse {
        status,
        status_text: status_text(status),
        headers,
        body,
    })
}

/// Maps a reqwest error onto a transport failure.
pub fn failure_from_reqwest(e: reqwest::Error) -> TransportFailure {
    let code = if e.is_timeout() {
        TransportCode::Timeout
    } else if e.is_connect() || e.is_request() {
        TransportCode::ConnectionFailed
    } else if e.is_redirect() {
        TransportCode::TooManyRedirects
    } else if e.is_body() || e.is_decode() {
        TransportCode::BodyReadError
    } else {
        TransportCode::RequestFailed
    };

    TransportFailure::new(code, error_chain(&e))
}

// reqwest's Display hides the cause ("error sending request for url ...")
fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
