use serde::{Deserialize, Serialize};
use std::fmt;

/// Timeout used when the entered value is not a positive number.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Lowest timeout the composer accepts.
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Highest timeout the composer accepts.
pub const MAX_TIMEOUT_MS: u64 = 30000;

/// Request methods offered by the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Whether a request body is sent for this method.
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Options => reqwest::Method::OPTIONS,
            HttpMethod::Head => reqwest::Method::HEAD,
        }
    }
}

/// One row of the editable header list. Keys may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Which half of a header row an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderField {
    Key,
    Value,
}

/// The request as configured in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestConfig {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<Header>,
    /// Raw body text. Only sent for POST, PUT and PATCH.
    pub body: String,
    /// Timeout in milliseconds
    pub timeout: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            url: "https://jsonplaceholder.typicode.com/posts/1".to_string(),
            headers: vec![Header::new("Content-Type", "application/json")],
            body: String::new(),
            timeout: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Pass-through proxy prefix settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxySettings {
    pub enabled: bool,
    pub url: String,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "https://cors-anywhere.herokuapp.com/".to_string(),
        }
    }
}

/// Parses a timeout typed into the form.
///
/// Non-numeric or zero input falls back to [`DEFAULT_TIMEOUT_MS`]; the result
/// is clamped to `[MIN_TIMEOUT_MS, MAX_TIMEOUT_MS]`.
pub fn parse_timeout(input: &str) -> u64 {
    let parsed = input
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS);
    parsed.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS)
}
