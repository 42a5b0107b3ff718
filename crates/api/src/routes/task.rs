//! Route definitions for the `/tasks` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/{id}", put(task::update).delete(task::delete))
        .method_not_allowed_fallback(super::not_found)
}
