//! Naming rules for photos attached to reports.
//!
//! Uploaded files are stored under a flat directory as
//! `{millis}-{original}`, where `millis` is the Unix time of the upload in
//! milliseconds and `original` is the client's file name reduced to its last
//! path component.

use crate::types::Timestamp;

/// Multipart field carrying the photo file.
pub const PHOTO_FIELD: &str = "photo";

/// Multipart field carrying the report title.
pub const TITLE_FIELD: &str = "title";

/// Reduce a client-supplied file name to its final path component.
///
/// Browsers normally send a bare name, but some clients send full paths
/// (`C:\\Users\\me\\img.jpg`). The remaining name is kept verbatim,
/// surrounding whitespace included. Returns `None` when nothing usable
/// remains, which callers treat as "no file uploaded".
pub fn client_file_name(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or("");

    if name.trim().is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}

/// Build the stored file name for an upload received at `at`.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use sitebook_core::upload::stored_file_name;
///
/// let at = chrono::Utc.timestamp_millis_opt(1_704_067_200_123).unwrap();
/// assert_eq!(stored_file_name("site.jpg", at), "1704067200123-site.jpg");
/// ```
pub fn stored_file_name(original: &str, at: Timestamp) -> String {
    format!("{}-{original}", at.timestamp_millis())
}
