//! Task model and DTOs.

use serde::{Deserialize, Serialize};
use sitebook_core::types::DbId;
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    #[serde(default, deserialize_with = "super::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub due_date: Option<Option<String>>,
}
