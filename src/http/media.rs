use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;

/// The UI shell's entry document, served on `/`.
pub fn index_service(config: &ServerConfig) -> ServeFile {
    ServeFile::new(config.assets_dir.join("index.html"))
}

/// Every other path: UI assets first, then the watched directory, else 404.
///
/// Both roots stream with byte-range support, answer HEAD without a body and
/// reject anything but GET and HEAD with 405. Directories are never listed.
pub fn file_service(config: &ServerConfig) -> ServeDir<ServeDir> {
    let media = ServeDir::new(&config.watched_dir).append_index_html_on_directories(false);
    ServeDir::new(&config.assets_dir)
        .append_index_html_on_directories(false)
        .fallback(media)
}

/// A zero-length file has no satisfiable byte range, but the file service
/// answers `206` with `Content-Range: bytes 0-0/0` for it. Turn that into 416.
pub async fn reject_empty_ranges(response: Response) -> Response {
    let empty_range = response.status() == StatusCode::PARTIAL_CONTENT
        && response
            .headers()
            .get(header::CONTENT_RANGE)
            .is_some_and(|v| v.as_bytes().ends_with(b"/0"));

    if !empty_range {
        return response;
    }
    (
        StatusCode::RANGE_NOT_SATISFIABLE,
        [(header::CONTENT_RANGE, "bytes */0")],
    )
        .into_response()
}
