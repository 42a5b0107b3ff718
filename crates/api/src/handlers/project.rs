//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use sitebook_core::records::RecordKind;
use sitebook_core::types::DbId;
use sitebook_db::models::project::{CreateProject, Project, UpdateProject};
use sitebook_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let pool = state.db.ready().await?;
    let projects = ProjectRepo::list(pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<Json<Project>> {
    let pool = state.db.ready().await?;
    let project = ProjectRepo::create(pool, &input).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
///
/// Responds with `null` when no project has this id.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<Option<Project>>> {
    let pool = state.db.ready().await?;
    let project = ProjectRepo::update(pool, id, &input).await?;
    if project.is_none() {
        tracing::debug!(id, "Update matched no project");
    }
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Acknowledges whether or not the project existed.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let pool = state.db.ready().await?;
    if !ProjectRepo::delete(pool, id).await? {
        tracing::debug!(id, "Delete matched no project");
    }
    Ok(Json(MessageResponse::new(
        RecordKind::Project.deleted_message(),
    )))
}
