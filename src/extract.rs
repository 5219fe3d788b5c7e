use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` whose rejections render as 422 `{"error": ...}` instead of axum's
/// plain-text 400/415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
