//! Project model and DTOs.

use serde::{Deserialize, Serialize};
use sitebook_core::types::DbId;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// DTO for creating a project. No field is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// DTO for updating a project. Only keys present in the payload are applied;
/// a `null` value clears the field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "super::present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub start_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub end_date: Option<Option<String>>,
}
