//! Merges simulated-browser headers with the user's header list.

use std::collections::HashMap;

use crate::composer::{Header, HttpMethod};

/// Headers a desktop Chrome sends on a top-level navigation.
pub const BROWSER_HEADERS: [(&str, &str); 16] = [
    (
        "User-Agent",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
    ),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
    ("Sec-Fetch-Dest", "document"),
    ("Sec-Fetch-Mode", "navigate"),
    ("Sec-Fetch-Site", "none"),
    ("Sec-Fetch-User", "?1"),
    ("Cache-Control", "max-age=0"),
    (
        "sec-ch-ua",
        "\"Not_A Brand\";v=\"8\", \"Chromium\";v=\"120\", \"Google Chrome\";v=\"120\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"macOS\""),
    ("Referer", "https://www.google.com/"),
    ("Origin", "https://www.google.com"),
];

/// `Accept` used for GET requests when the user did not set one. Narrower
/// than the baseline value above; both are kept as observed.
pub const GET_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

/// Builds the baseline header mapping.
pub fn browser_headers() -> HashMap<String, String> {
    BROWSER_HEADERS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Merges `user` headers over `baseline`.
///
/// Rows with an empty key or value are skipped. Keys match case-sensitively,
/// later rows win. For GET, `Accept` is replaced by [`GET_ACCEPT`] unless any
/// user row is named `accept` in any case.
pub fn merge_headers(
    baseline: &HashMap<String, String>,
    user: &[Header],
    method: HttpMethod,
) -> HashMap<String, String> {
    let mut merged = baseline.clone();

    for header in user {
        if !header.key.is_empty() && !header.value.is_empty() {
            merged.insert(header.key.clone(), header.value.clone());
        }
    }

    let user_sets_accept = user.iter().any(|h| h.key.eq_ignore_ascii_case("accept"));
    if method == HttpMethod::Get && !user_sets_accept {
        merged.insert("Accept".to_string(), GET_ACCEPT.to_string());
    }

    merged
}
