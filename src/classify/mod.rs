//! Failure classification.
//!
//! A failed dispatch is matched against an ordered rule table; the first rule
//! whose predicate holds decides the category, detail text and suggestions.
//! Raw signals overlap (a proxy can answer 403 with "CORS" in the message), so
//! the order of [`rules::RULES`] is the precedence.

pub mod rules;

use serde::Serialize;
use std::fmt;

use crate::dispatch::{TransportCode, TransportFailure};

pub use rules::{Rule, Verdict, RULES};

/// User-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    NetworkError,
    TimeoutError,
    #[serde(rename = "CORSError")]
    CorsError,
    AccessForbidden403,
    ClientError,
    ServerError,
    UnknownError,
}

impl ErrorCategory {
    /// Heading shown in the error panel.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorCategory::NetworkError => "Network Error",
            ErrorCategory::TimeoutError => "Timeout Error",
            ErrorCategory::CorsError => "CORS Error",
            ErrorCategory::AccessForbidden403 => "Access Forbidden (403)",
            ErrorCategory::ClientError => "Client Error",
            ErrorCategory::ServerError => "Server Error",
            ErrorCategory::UnknownError => "Unknown Error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The classifier's output, rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedError {
    /// Underlying error text, verbatim
    pub message: String,
    pub category: ErrorCategory,
    pub label: String,
    pub detail: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Everything the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct FailureSignal<'a> {
    pub code: Option<TransportCode>,
    pub message: &'a str,
    /// Status of the response, if one was received
    pub status: Option<u16>,
    pub status_text: Option<&'a str>,
    /// Configured timeout in milliseconds
    pub timeout_ms: u64,
}

impl<'a> FailureSignal<'a> {
    pub fn from_failure(failure: &'a TransportFailure, timeout_ms: u64) -> Self {
        let response = failure.response.as_ref();
        Self {
            code: failure.code,
            message: &failure.message,
            status: response.map(|r| r.status).filter(|s| *s != 0),
            status_text: response.map(|r| r.status_text.as_str()),
            timeout_ms,
        }
    }
}

/// Classifies a failure. Falls back to [`ErrorCategory::UnknownError`] with
/// empty detail and suggestions when no rule matches.
pub fn classify(signal: &FailureSignal<'_>) -> ClassifiedError {
    let verdict = RULES
        .iter()
        .find(|rule| (rule.matches)(signal))
        .map(|rule| {
            tracing::debug!(rule = rule.name, "Failure classified");
            (rule.verdict)(signal)
        })
        .unwrap_or_else(Verdict::unknown);

    ClassifiedError {
        message: signal.message.to_string(),
        category: verdict.category,
        label: verdict.category.label().to_string(),
        detail: verdict.detail,
        suggestions: verdict.suggestions,
        code: signal.code.map(|c| c.as_str().to_string()),
    }
}
