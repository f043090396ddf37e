use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct FrontendAssets;

pub async fn serve_static(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');

    // Try to serve the exact path first
    if let Some(content) = FrontendAssets::get(path) {
        return response_from_asset(path, content.data.into_owned());
    }

    // Anything else is the single page
    if let Some(content) = FrontendAssets::get("index.html") {
        return response_from_asset("index.html", content.data.into_owned());
    }

    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn response_from_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string();

    let cache = if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=3600"
    };

    (
        [(header::CONTENT_TYPE, mime), (header::CACHE_CONTROL, cache.to_string())],
        data,
    )
        .into_response()
}
