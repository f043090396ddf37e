//! Rendering of dispatch results: a generic JSON viewer plus the response
//! panel built on top of it.

pub mod html;
pub mod json;

use serde_json::{Map, Value};
use std::collections::HashMap;

pub use html::{escape_html, exchange_html, json_view, status_class};
pub use json::{clipboard_text, render, Node, TokenKind};

/// Header mapping as a JSON object with keys sorted, for stable display.
pub fn headers_value(headers: &HashMap<String, String>) -> Value {
    let mut entries: Vec<_> = headers.iter().collect();
    entries.sort();
    let map: Map<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    Value::Object(map)
}
