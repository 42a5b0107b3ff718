use std::sync::Arc;

use sitebook_db::Database;

use crate::uploads::PhotoStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Store connection manager.
    pub db: Arc<Database>,
    /// Local directory for report photos.
    pub photos: Arc<PhotoStore>,
}
