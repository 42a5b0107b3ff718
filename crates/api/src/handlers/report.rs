//! Handlers for the `/reports` resource.

use axum::extract::State;
use axum::Json;
use sitebook_core::records::RecordKind;
use sitebook_core::types::DbId;
use sitebook_db::models::report::{Report, UpdateReport};
use sitebook_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::MessageResponse;
use crate::state::AppState;
use crate::uploads::ReportForm;

/// GET /api/reports
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Report>>> {
    let pool = state.db.ready().await?;
    Ok(Json(ReportRepo::list(pool).await?))
}

/// POST /api/reports
///
/// Accepts `multipart/form-data` (`title` + optional `photo` file) or JSON.
/// The photo is written before the insert; if the insert fails the file is
/// removed again.
pub async fn create(
    State(state): State<AppState>,
    ReportForm { input, saved_photo }: ReportForm,
) -> AppResult<Json<Report>> {
    let inserted = async {
        let pool = state.db.ready().await?;
        ReportRepo::create(pool, &input).await
    }
    .await;

    match inserted {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            if let Some(name) = saved_photo {
                state.photos.discard(&name).await;
            }
            Err(e.into())
        }
    }
}

/// PUT /api/reports/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateReport>,
) -> AppResult<Json<Option<Report>>> {
    let pool = state.db.ready().await?;
    Ok(Json(ReportRepo::update(pool, id, &input).await?))
}

/// DELETE /api/reports/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let pool = state.db.ready().await?;
    ReportRepo::delete(pool, id).await?;
    Ok(Json(MessageResponse::new(
        RecordKind::Report.deleted_message(),
    )))
}
