//! Repository for the `tasks` table.

use sitebook_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

const COLUMNS: &str = "id, title, due_date";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (title, due_date)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(&input.title)
            .bind(&input.due_date)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    /// Merge-update a task. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = CASE WHEN $2 THEN $3 ELSE title END,
                due_date = CASE WHEN $4 THEN $5 ELSE due_date END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(input.title.as_ref().and_then(|v| v.as_deref()))
            .bind(input.due_date.is_some())
            .bind(input.due_date.as_ref().and_then(|v| v.as_deref()))
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
