use super::{ErrorCategory, FailureSignal};
use crate::dispatch::TransportCode;

/// Category, detail and suggestions decided by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub category: ErrorCategory,
    pub detail: String,
    pub suggestions: Vec<String>,
}

impl Verdict {
    fn new(category: ErrorCategory, detail: impl Into<String>, suggestions: &[&str]) -> Self {
        Self {
            category,
            detail: detail.into(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Verdict when no rule matches.
    pub fn unknown() -> Self {
        Self::new(ErrorCategory::UnknownError, "", &[])
    }
}

/// A (predicate, producer) pair.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&FailureSignal<'_>) -> bool,
    pub verdict: fn(&FailureSignal<'_>) -> Verdict,
}

/// Classification rules in precedence order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "network",
        matches: |s| s.code == Some(TransportCode::ConnectionFailed),
        verdict: |_| {
            Verdict::new(
                ErrorCategory::NetworkError,
                "Failed to connect to the server. This could be due to network issues or CORS policy.",
                &[
                    "Check if the URL is correct and accessible",
                    "Try enabling the CORS proxy option",
                    "Verify your internet connection",
                    "Check if the server is running and accessible",
                ],
            )
        },
    },
    Rule {
        name: "timeout",
        matches: |s| s.code == Some(TransportCode::Timeout),
        verdict: |s| {
            Verdict::new(
                ErrorCategory::TimeoutError,
                format!("Request timed out after {}ms", s.timeout_ms),
                &[
                    "Increase the timeout value",
                    "Check if the server is responding slowly",
                    "Verify the URL is correct",
                ],
            )
        },
    },
    Rule {
        name: "cors",
        matches: |s| s.message.contains("CORS"),
        verdict: |_| {
            Verdict::new(
                ErrorCategory::CorsError,
                "Cross-Origin Resource Sharing (CORS) policy blocked this request.",
                &[
                    "Enable the \"Use CORS Proxy\" option",
                    "Use APIs that support CORS (try the quick test URLs)",
                    "Contact the API provider to enable CORS for your domain",
                ],
            )
        },
    },
    Rule {
        name: "forbidden",
        matches: |s| s.status == Some(403),
        verdict: |_| {
            Verdict::new(
                ErrorCategory::AccessForbidden403,
                "The server understood the request but refused to authorize it. This often indicates bot detection.",
                &[
                    "Enable CORS proxy and try different proxy servers",
                    "The site may have sophisticated bot detection",
                    "Try adding more specific headers (cookies, referrer)",
                    "Some sites require authentication or specific user sessions",
                    "Consider using a different testing API that allows programmatic access",
                ],
            )
        },
    },
    Rule {
        name: "client_error",
        matches: |s| matches!(s.status, Some(400..=499)),
        verdict: |s| {
            Verdict::new(
                ErrorCategory::ClientError,
                status_detail(s),
                &[
                    "Check the request URL and parameters",
                    "Verify authentication headers if required",
                    "Review the request method and body format",
                ],
            )
        },
    },
    Rule {
        name: "server_error",
        matches: |s| matches!(s.status, Some(500..)),
        verdict: |s| {
            Verdict::new(
                ErrorCategory::ServerError,
                status_detail(s),
                &[
                    "The server is experiencing issues",
                    "Try again later",
                    "Contact the API provider if the issue persists",
                ],
            )
        },
    },
];

fn status_detail(signal: &FailureSignal<'_>) -> String {
    format!(
        "HTTP {}: {}",
        signal.status.unwrap_or_default(),
        signal.status_text.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(message: &str) -> FailureSignal<'_> {
        FailureSignal {
            code: None,
            message,
            status: None,
            status_text: None,
            timeout_ms: 5000,
        }
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["network", "timeout", "cors", "forbidden", "client_error", "server_error"]
        );
    }

    #[test]
    fn test_each_rule_in_isolation() {
        let network = FailureSignal {
            code: Some(TransportCode::ConnectionFailed),
            ..bare("")
        };
        assert!((RULES[0].matches)(&network));
        assert!(!(RULES[1].matches)(&network));

        let timeout = FailureSignal {
            code: Some(TransportCode::Timeout),
            ..bare("")
        };
        assert!((RULES[1].matches)(&timeout));
        assert_eq!((RULES[1].verdict)(&timeout).detail, "Request timed out after 5000ms");

        assert!((RULES[2].matches)(&bare("CORS request did not succeed")));

        let forbidden = FailureSignal {
            status: Some(403),
            ..bare("")
        };
        assert!((RULES[3].matches)(&forbidden));
        // 403 is also a 4xx; only table order keeps it out of client_error
        assert!((RULES[4].matches)(&forbidden));

        let teapot = FailureSignal {
            status: Some(499),
            ..bare("")
        };
        assert!((RULES[4].matches)(&teapot));
        assert!(!(RULES[5].matches)(&teapot));

        let gateway = FailureSignal {
            status: Some(504),
            status_text: Some("Gateway Timeout"),
            ..bare("")
        };
        assert!((RULES[5].matches)(&gateway));
        assert_eq!((RULES[5].verdict)(&gateway).detail, "HTTP 504: Gateway Timeout");
    }
}
