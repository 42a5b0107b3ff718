//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::Json;
use sitebook_core::records::RecordKind;
use sitebook_core::types::DbId;
use sitebook_db::models::task::{CreateTask, Task, UpdateTask};
use sitebook_db::repositories::TaskRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let pool = state.db.ready().await?;
    Ok(Json(TaskRepo::list(pool).await?))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTask>,
) -> AppResult<Json<Task>> {
    let pool = state.db.ready().await?;
    Ok(Json(TaskRepo::create(pool, &input).await?))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateTask>,
) -> AppResult<Json<Option<Task>>> {
    let pool = state.db.ready().await?;
    Ok(Json(TaskRepo::update(pool, id, &input).await?))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let pool = state.db.ready().await?;
    TaskRepo::delete(pool, id).await?;
    Ok(Json(MessageResponse::new(RecordKind::Task.deleted_message())))
}
