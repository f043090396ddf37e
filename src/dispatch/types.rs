use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::classify::ClassifiedError;
use crate::composer::HttpMethod;

/// Body attached to an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Body text that parsed as JSON
    Json(Value),
    /// Body text sent verbatim
    Text(String),
}

/// Fully resolved request handed to a [`Transport`](super::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<RequestBody>,
    /// Timeout in milliseconds
    pub timeout_ms: u64,
}

/// Machine codes a transport attaches to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportCode {
    /// The connection was never established or dropped before a response
    ConnectionFailed,
    Timeout,
    InvalidUrl,
    TooManyRedirects,
    BodyReadError,
    /// 4xx response
    HttpClientError,
    /// 5xx response
    HttpServerError,
    /// Any other non-2xx response
    UnexpectedStatus,
    RequestFailed,
}

impl TransportCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportCode::ConnectionFailed => "CONNECTION_FAILED",
            TransportCode::Timeout => "TIMEOUT",
            TransportCode::InvalidUrl => "INVALID_URL",
            TransportCode::TooManyRedirects => "TOO_MANY_REDIRECTS",
            TransportCode::BodyReadError => "BODY_READ_ERROR",
            TransportCode::HttpClientError => "HTTP_CLIENT_ERROR",
            TransportCode::HttpServerError => "HTTP_SERVER_ERROR",
            TransportCode::UnexpectedStatus => "UNEXPECTED_STATUS",
            TransportCode::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Code for a response whose status is outside 2xx.
    pub fn for_status(status: u16) -> Self {
        match status {
            400..=499 => TransportCode::HttpClientError,
            500..=599 => TransportCode::HttpServerError,
            _ => TransportCode::UnexpectedStatus,
        }
    }
}

/// A response as received by the transport, body already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub body: Value,
}

/// A failed exchange. `response` is set when the server answered with a
/// non-2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportFailure {
    pub code: Option<TransportCode>,
    pub message: String,
    pub response: Option<TransportResponse>,
}

impl TransportFailure {
    pub fn new(code: TransportCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            response: None,
        }
    }

    /// Failure for a response that arrived with a non-2xx status.
    pub fn from_status(response: TransportResponse) -> Self {
        Self {
            code: Some(TransportCode::for_status(response.status)),
            message: format!("Request failed with status code {}", response.status),
            response: Some(response),
        }
    }
}

/// Result of one send, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DispatchOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        data: Value,
        status: u16,
        status_text: String,
        headers: HashMap<String, String>,
        duration_ms: u64,
    },
    #[serde(rename_all = "camelCase")]
    Failure {
        /// Partial body, `null` when none was received
        data: Value,
        /// 0 when no response was received
        status: u16,
        status_text: String,
        headers: HashMap<String, String>,
        duration_ms: u64,
        error: ClassifiedError,
    },
}

impl DispatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success { .. })
    }

    pub fn status(&self) -> u16 {
        match self {
            DispatchOutcome::Success { status, .. } | DispatchOutcome::Failure { status, .. } => {
                *status
            }
        }
    }

    pub fn status_text(&self) -> &str {
        match self {
            DispatchOutcome::Success { status_text, .. }
            | DispatchOutcome::Failure { status_text, .. } => status_text,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        match self {
            DispatchOutcome::Success { duration_ms, .. }
            | DispatchOutcome::Failure { duration_ms, .. } => *duration_ms,
        }
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        match self {
            DispatchOutcome::Success { headers, .. } | DispatchOutcome::Failure { headers, .. } => {
                headers
            }
        }
    }

    pub fn data(&self) -> &Value {
        match self {
            DispatchOutcome::Success { data, .. } | DispatchOutcome::Failure { data, .. } => data,
        }
    }

    pub fn error(&self) -> Option<&ClassifiedError> {
        match self {
            DispatchOutcome::Success { .. } => None,
            DispatchOutcome::Failure { error, .. } => Some(error),
        }
    }
}

/// What was sent and what came back for one send action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub url: String,
    pub request_headers: HashMap<String, String>,
    pub outcome: DispatchOutcome,
}
