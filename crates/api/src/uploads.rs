//! Report photo intake.
//!
//! [`PhotoStore`] writes uploaded files to a local directory. [`ReportForm`]
//! is the body extractor for report creation: it accepts either a
//! `multipart/form-data` form (`title` text field plus an optional `photo`
//! file) or a plain JSON body carrying only the title.

use std::path::{Path, PathBuf};

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::Deserialize;
use sitebook_core::error::CoreError;
use sitebook_core::upload::{client_file_name, stored_file_name, PHOTO_FIELD, TITLE_FIELD};
use sitebook_db::models::report::CreateReport;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Flat directory of uploaded report photos.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    dir: PathBuf,
}

impl PhotoStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, stored_name: &str) -> PathBuf {
        self.dir.join(stored_name)
    }

    /// Write `data` under a timestamp-prefixed name and return that name.
    ///
    /// `original` must already be reduced to a bare file name.
    pub async fn save(&self, original: &str, data: &[u8]) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let stored_name = stored_file_name(original, chrono::Utc::now());
        tokio::fs::write(self.path_of(&stored_name), data).await?;

        tracing::info!(file = %stored_name, bytes = data.len(), "Stored report photo");
        Ok(stored_name)
    }

    /// Remove a file written by [`save`](Self::save).
    ///
    /// Used to undo a save when the report insert fails. Errors are logged.
    pub async fn discard(&self, stored_name: &str) {
        match tokio::fs::remove_file(self.path_of(stored_name)).await {
            Ok(()) => tracing::info!(file = %stored_name, "Discarded orphaned report photo"),
            Err(e) => {
                tracing::warn!(file = %stored_name, error = %e, "Failed to discard report photo")
            }
        }
    }
}

/// JSON body accepted by `POST /api/reports`.
///
/// Only the title is read. A `photo` key is ignored like any other unknown
/// key, since the photo reference always comes from an uploaded file.
#[derive(Debug, Deserialize)]
struct ReportFields {
    title: Option<String>,
}

/// Parsed body of `POST /api/reports`.
#[derive(Debug)]
pub struct ReportForm {
    pub input: CreateReport,
    /// Name of the file this request wrote to the [`PhotoStore`], if any.
    pub saved_photo: Option<String>,
}

impl FromRequest<AppState> for ReportForm {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        if !is_multipart(req.headers()) {
            let ApiJson(fields) = ApiJson::<ReportFields>::from_request(req, state).await?;
            return Ok(Self {
                input: CreateReport {
                    title: fields.title,
                    photo: None,
                },
                saved_photo: None,
            });
        }

        let mut multipart = Multipart::from_request(req, state).await?;
        let mut title = None;
        let mut saved_photo = None;

        if let Err(e) = read_fields(&mut multipart, &state.photos, &mut title, &mut saved_photo).await
        {
            if let Some(name) = &saved_photo {
                state.photos.discard(name).await;
            }
            return Err(e);
        }

        Ok(Self {
            input: CreateReport {
                title,
                photo: saved_photo.clone(),
            },
            saved_photo,
        })
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

/// Read every multipart field, saving the photo as soon as it arrives.
///
/// Text fields other than `title` are ignored. A `photo` part without a
/// usable file name counts as no file.
async fn read_fields(
    multipart: &mut Multipart,
    photos: &PhotoStore,
    title: &mut Option<String>,
    saved_photo: &mut Option<String>,
) -> Result<(), AppError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().and_then(client_file_name);

        match (name.as_str(), file_name) {
            (PHOTO_FIELD, Some(original)) => {
                if saved_photo.is_some() {
                    return Err(CoreError::Validation(format!(
                        "Only one '{PHOTO_FIELD}' file may be uploaded"
                    ))
                    .into());
                }
                let data = field.bytes().await?;
                let stored = photos.save(&original, &data).await.map_err(|e| {
                    CoreError::Internal(format!("Failed to store report photo: {e}"))
                })?;
                *saved_photo = Some(stored);
            }
            (TITLE_FIELD, None) => {
                *title = Some(field.text().await?);
            }
            (other, Some(_)) => {
                return Err(CoreError::Validation(format!("Unexpected file field '{other}'")).into());
            }
            _ => {}
        }
    }
    Ok(())
}
