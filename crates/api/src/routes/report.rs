//! Route definitions for the `/reports` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create (multipart `title` + `photo`, or JSON)
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
///
/// Request bodies may be up to `max_upload_bytes` to leave room for photos.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", get(report::list).post(report::create))
        .route("/{id}", put(report::update).delete(report::delete))
        .method_not_allowed_fallback(super::not_found)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
