//! Document models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the stored row
//! - A create DTO for inserts
//! - A `Deserialize` update DTO for merge updates
//!
//! Update fields are `Option<Option<T>>`: the outer `None` means the key was
//! absent and the column is kept, `Some(None)` means the key was sent as
//! `null` and the column is cleared. Unknown JSON keys are ignored by every
//! DTO.

use serde::{Deserialize, Deserializer};

pub mod project;
pub mod report;
pub mod task;

/// Deserialize a key that is present in the payload, keeping an explicit
/// `null` as `Some(None)`.
///
/// Pair with `#[serde(default)]` so a missing key stays `None`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
