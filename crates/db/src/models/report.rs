//! Report model and DTOs.

use serde::{Deserialize, Serialize};
use sitebook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub title: Option<String>,
    /// Stored file name of the attached photo, empty when none was uploaded.
    pub photo: String,
    /// Set by the database on insert; only an explicit update can clear it.
    pub created_at: Option<Timestamp>,
}

/// Input for creating a report.
///
/// Built by the upload path, never deserialized from a client: `photo` is
/// the name the photo store generated, or `None` when no file was attached
/// (stored as an empty string).
#[derive(Debug, Clone, Default)]
pub struct CreateReport {
    pub title: Option<String>,
    pub photo: Option<String>,
}

/// DTO for updating a report. Only keys present in the payload are applied.
///
/// A `null` photo is stored as an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReport {
    #[serde(default, deserialize_with = "super::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub photo: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub created_at: Option<Option<Timestamp>>,
}
