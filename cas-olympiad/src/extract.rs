use axum::extract::FromRequest;

use crate::error::AppError;

/// [`axum::Json`], but a malformed body or missing field is rejected with an [`AppError`], so the
/// client gets the same `{"error": ...}` body as for any other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
