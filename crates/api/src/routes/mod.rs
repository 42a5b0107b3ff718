pub mod project;
pub mod report;
pub mod task;

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use sitebook_core::records::RecordKind;
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Body of every response for an unmatched path or method.
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   update, delete
///
/// /tasks                                           list, create
/// /tasks/{id}                                      update, delete
///
/// /reports                                         list, create (multipart)
/// /reports/{id}                                    update, delete
/// ```
///
/// Project and task requests answer 408 after `request_timeout_secs`.
/// Report routes carry no timeout so a large photo upload is never cut off
/// partway through a body the upload limit allows.
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    let timeout = TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.request_timeout_secs),
    );

    Router::new()
        .nest(
            &RecordKind::Project.route_prefix(),
            project::router().layer(timeout.clone()),
        )
        .nest(
            &RecordKind::Task.route_prefix(),
            task::router().layer(timeout),
        )
        .nest(
            &RecordKind::Report.route_prefix(),
            report::router(config.max_upload_bytes),
        )
}

/// Fallback for unknown paths and unsupported methods on known paths.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
