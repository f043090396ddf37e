//! HTML output for the response panel.

use serde_json::Value;

use super::json::{clipboard_text, render, Node};
use super::headers_value;
use crate::dispatch::{DispatchOutcome, Exchange};

/// Indentation per nesting level, in pixels.
pub const INDENT_PX: u32 = 20;

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// CSS class for a status code.
pub fn status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "status-success",
        400..=499 => "status-warning",
        500.. => "status-danger",
        _ => "status-neutral",
    }
}

fn write_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Token { kind, text } => {
                out.push_str(&format!(
                    "<span class=\"{}\">{}</span>",
                    kind.css_class(),
                    escape_html(text)
                ));
            }
            Node::Line { children } => {
                // nested divs accumulate the margin, one unit per level
                out.push_str(&format!("<div style=\"margin-left: {}px\">", INDENT_PX));
                write_nodes(children, out);
                out.push_str("</div>");
            }
        }
    }
}

/// A JSON value as a coloured, indented view with a copy button carrying the
/// clipboard text.
pub fn json_view(value: &Value) -> String {
    let mut out = String::from("<div class=\"json-viewer\">");
    out.push_str(&format!(
        "<button class=\"copy\" type=\"button\" data-copy=\"{}\">Copy</button>",
        escape_html(&clipboard_text(value))
    ));
    out.push_str("<div class=\"json-view\">");
    write_nodes(&render(value), &mut out);
    out.push_str("</div></div>");
    out
}

fn error_panel(outcome: &DispatchOutcome, out: &mut String) {
    let Some(error) = outcome.error() else {
        return;
    };

    out.push_str("<div class=\"error-panel\"><div class=\"error-heading\">");
    out.push_str(&format!(
        "<span class=\"error-label\">{}</span>",
        escape_html(&error.label)
    ));
    if let Some(code) = &error.code {
        out.push_str(&format!(
            "<span class=\"error-code\">{}</span>",
            escape_html(code)
        ));
    }
    out.push_str("</div>");

    out.push_str(&format!(
        "<div class=\"error-section\"><p class=\"error-title\">Message:</p><p>{}</p></div>",
        escape_html(&error.message)
    ));

    if !error.detail.is_empty() {
        out.push_str(&format!(
            "<div class=\"error-section\"><p class=\"error-title\">Details:</p><p>{}</p></div>",
            escape_html(&error.detail)
        ));
    }

    if !error.suggestions.is_empty() {
        out.push_str("<div class=\"error-section\"><p class=\"error-title\">Suggestions:</p><ul>");
        for suggestion in &error.suggestions {
            out.push_str(&format!("<li>{}</li>", escape_html(suggestion)));
        }
        out.push_str("</ul></div>");
    }

    out.push_str("</div>");
}

/// Renders the whole response panel for one exchange.
pub fn exchange_html(exchange: &Exchange) -> String {
    let outcome = &exchange.outcome;
    let mut out = String::new();

    out.push_str("<div class=\"status-info\">");
    out.push_str(&format!(
        "<div class=\"row\"><span>Status:</span><span class=\"status {}\">{} {}</span></div>",
        status_class(outcome.status()),
        outcome.status(),
        escape_html(outcome.status_text())
    ));
    out.push_str(&format!(
        "<div class=\"row\"><span>Duration:</span><span>{}ms</span></div>",
        outcome.duration_ms()
    ));
    error_panel(outcome, &mut out);
    out.push_str("</div>");

    out.push_str(&format!(
        "<h3>Request Headers Sent</h3><p class=\"muted\">{}</p>",
        escape_html(&exchange.url)
    ));
    out.push_str(&json_view(&headers_value(&exchange.request_headers)));

    out.push_str("<h3>Response Headers</h3>");
    out.push_str(&json_view(&headers_value(outcome.headers())));

    out.push_str("<h3>Response Body</h3>");
    out.push_str(&json_view(outcome.data()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, FailureSignal};
    use crate::dispatch::TransportCode;
    use serde_json::json;
    use std::collections::HashMap;

    fn failed_exchange(code: TransportCode, status: u16) -> Exchange {
        let error = classify(&FailureSignal {
            code: Some(code),
            message: "Request failed with status code 403",
            status: Some(status),
            status_text: Some("Forbidden"),
            timeout_ms: 5000,
        });
        Exchange {
            url: "https://example.com/?q=<x>".to_string(),
            request_headers: HashMap::from([("Accept".to_string(), "*/*".to_string())]),
            outcome: DispatchOutcome::Failure {
                data: Value::Null,
                status,
                status_text: "Forbidden".to_string(),
                headers: HashMap::new(),
                duration_ms: 87,
                error,
            },
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(204), "status-success");
        assert_eq!(status_class(404), "status-warning");
        assert_eq!(status_class(503), "status-danger");
        assert_eq!(status_class(0), "status-neutral");
        assert_eq!(status_class(301), "status-neutral");
    }

    #[test]
    fn test_json_view_markup() {
        let html = json_view(&json!({"a": "<b>"}));
        assert!(html.contains("<span class=\"json-key\">&quot;a&quot;</span>"));
        assert!(html.contains("<span class=\"json-string\">&quot;&lt;b&gt;&quot;</span>"));
        assert!(html.contains("<div style=\"margin-left: 20px\">"));
        assert!(html.contains("data-copy=\"{\n  &quot;a&quot;: &quot;&lt;b&gt;&quot;\n}\""));
    }

    #[test]
    fn test_nested_lines_nest_divs() {
        let html = json_view(&json!({"a": {"b": 1}}));
        assert!(html.contains(
            "<div style=\"margin-left: 20px\"><span class=\"json-key\">&quot;a&quot;</span>\
             <span class=\"json-punct\">: </span><span class=\"json-bracket\">{</span>\
             <div style=\"margin-left: 20px\"><span class=\"json-key\">&quot;b&quot;</span>"
        ));
        assert!(html.contains("</div><span class=\"json-bracket\">}</span></div>"));
    }

    #[test]
    fn test_error_panel_for_forbidden() {
        let html = exchange_html(&failed_exchange(TransportCode::HttpClientError, 403));
        assert!(html.contains("Access Forbidden (403)"));
        assert!(html.contains("<span class=\"error-code\">HTTP_CLIENT_ERROR</span>"));
        assert!(html.contains("<li>The site may have sophisticated bot detection</li>"));
        assert!(html.contains("status-warning"));
        assert!(html.contains("87ms"));
        assert!(html.contains("https://example.com/?q=&lt;x&gt;"));
    }

    #[test]
    fn test_unknown_error_hides_empty_sections() {
        let html = exchange_html(&failed_exchange(TransportCode::UnexpectedStatus, 304));
        assert!(html.contains("Unknown Error"));
        assert!(!html.contains("Details:"));
        assert!(!html.contains("Suggestions:"));
    }

    #[test]
    fn test_success_has_no_error_panel() {
        let exchange = Exchange {
            url: "https://example.com".to_string(),
            request_headers: HashMap::new(),
            outcome: DispatchOutcome::Success {
                data: json!({"ok": true}),
                status: 200,
                status_text: "OK".to_string(),
                headers: HashMap::new(),
                duration_ms: 5,
            },
        };
        let html = exchange_html(&exchange);
        assert!(!html.contains("error-panel"));
        assert!(html.contains("<span class=\"json-bool\">true</span>"));
        assert!(html.contains("Response Body"));
    }
}
