use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use log::debug;

pub async fn default_handler(uri: Uri) -> Response {
    debug!("no route for {}", uri.path());

    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, "text/plain"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        "404 Not Found",
    )
        .into_response()
}
