//! Request extractors whose rejections are reported as [`AppError`].

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. Malformed or wrongly-typed bodies become a
/// structured `INVALID_REQUEST` response instead of axum's plain-text one.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor with the same rejection handling as [`ApiJson`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
