//! Static file serving from the asset directory.

use std::path::Path;

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    response::Response,
};
use tower_http::services::ServeDir;

use crate::config::{CACHE_CONTROL_ERROR, CACHE_CONTROL_STATIC};

/// Create the service mounted under `/static`.
///
/// Directory listings are not generated and unknown files answer 404.
pub fn create_static_service(static_dir: &Path) -> ServeDir {
    ServeDir::new(static_dir).append_index_html_on_directories(false)
}

/// Long-lived caching for files that exist, short TTL for misses so a 404 is
/// not pinned in a CDN for a day.
pub async fn static_cache_control(mut response: Response) -> Response {
    let value = if response.status().is_success() {
        CACHE_CONTROL_STATIC
    } else {
        CACHE_CONTROL_ERROR
    };
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(value));
    response
}
