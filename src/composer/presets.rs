//! Canned URLs offered next to the URL field and the proxy selector.

use serde::Serialize;

/// Endpoints that answer cross-origin requests, for quick testing.
pub const QUICK_TEST_URLS: [&str; 4] = [
    "https://httpbin.org/get",
    "https://catfact.ninja/fact",
    "https://api.github.com/users/octocat",
    "https://restcountries.com/v3.1/name/canada",
];

/// Known pass-through proxy prefixes as `(label, prefix)`.
pub const PROXY_PRESETS: [(&str, &str); 4] = [
    ("CORS Anywhere (Heroku)", "https://cors-anywhere.herokuapp.com/"),
    ("AllOrigins", "https://api.allorigins.win/raw?url="),
    ("CORS Proxy IO", "https://corsproxy.io/?"),
    ("CORS.sh", "https://proxy.cors.sh/"),
];

#[derive(Debug, Serialize)]
pub struct QuickUrl {
    /// Host part of the URL, used as the button label
    pub label: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ProxyPreset {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct Presets {
    pub methods: Vec<String>,
    pub quick_urls: Vec<QuickUrl>,
    pub proxies: Vec<ProxyPreset>,
}

impl Presets {
    pub fn new() -> Self {
        Self {
            methods: super::HttpMethod::ALL
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
            quick_urls: QUICK_TEST_URLS
                .iter()
                .map(|url| QuickUrl {
                    label: host_label(url),
                    url: url.to_string(),
                })
                .collect(),
            proxies: PROXY_PRESETS
                .iter()
                .map(|(label, url)| ProxyPreset {
                    label: label.to_string(),
                    url: url.to_string(),
                })
                .collect(),
        }
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self::new()
    }
}

fn host_label(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
