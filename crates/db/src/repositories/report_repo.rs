//! Repository for the `reports` table.

use sitebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{CreateReport, Report, UpdateReport};

const COLUMNS: &str = "id, title, photo, created_at";

/// Provides CRUD operations for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new report. `created_at` is set by the database.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (title, photo)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(&input.title)
            .bind(input.photo.as_deref().unwrap_or(""))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports ORDER BY id");
        sqlx::query_as::<_, Report>(&query).fetch_all(pool).await
    }

    /// Merge-update a report. Returns `None` if no row with `id` exists.
    ///
    /// `photo` cannot be cleared to NULL; a `null` photo becomes `""`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReport,
    ) -> Result<Option<Report>, sqlx::Error> {
        let photo = input
            .photo
            .as_ref()
            .map(|p| p.as_deref().unwrap_or(""));

        let query = format!(
            "UPDATE reports SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                photo = COALESCE($4, photo),
                created_at = CASE WHEN $5 THEN $6 ELSE created_at END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(input.title.as_ref().and_then(|v| v.as_deref()))
            .bind(photo)
            .bind(input.created_at.is_some())
            .bind(input.created_at.flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
