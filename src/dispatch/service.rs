//! Transport abstraction layer.
//!
//! Provides a trait-based abstraction over the HTTP client so the dispatcher
//! can be driven by reqwest in production and by scripted transports in
//! tests.

use super::response_builder::{build_response, failure_from_reqwest};
use super::types::{DispatchRequest, RequestBody, TransportCode, TransportFailure, TransportResponse};
use reqwest::header::{HeaderName, HeaderValue};
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Trait for transports that carry out one HTTP exchange.
pub trait Transport: Send + Sync {
    /// Sends the request and waits for the full response.
    ///
    /// Only a 2xx response is `Ok`. Any other status is returned as a
    /// [`TransportFailure`] with the response attached.
    fn send(
        &self,
        request: DispatchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportFailure>> + Send + '_>>;
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default client (rustls, gzip/deflate/brotli
    /// decoding, redirects followed).
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Creates a new `ReqwestTransport` wrapped in an `Arc`.
    pub fn arc() -> Result<Arc<Self>, reqwest::Error> {
        Self::new().map(Arc::new)
    }

    async fn perform(&self, request: DispatchRequest) -> Result<TransportResponse, TransportFailure> {
        let url = url::Url::parse(&request.url).map_err(|e| {
            TransportFailure::new(TransportCode::InvalidUrl, format!("Invalid URL: {}", e))
        })?;

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .timeout(Duration::from_millis(request.timeout_ms));

        for (key, value) in &request.headers {
            match (HeaderName::from_str(key), HeaderValue::from_str(value)) {
                (Ok(name), Ok(value)) => builder = builder.header(name, value),
                _ => tracing::warn!(header = %key, "Skipping invalid header"),
            }
        }

        // `json` only sets Content-Type when the user has not
        builder = match request.body {
            Some(RequestBody::Json(json)) => builder.json(&json),
            Some(RequestBody::Text(text)) => builder.body(text),
            None => builder,
        };

        let response = builder.send().await.map_err(failure_from_reqwest)?;
        let response = build_response(response).await?;

        if (200..300).contains(&response.status) {
            Ok(response)
        } else {
            Err(TransportFailure::from_status(response))
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: DispatchRequest,
    ) -> Pin<Box<dyn Future<Output = Result<TransportResponse, TransportFailure>> + Send + '_>> {
        Box::pin(self.perform(request))
    }
}
