//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `307 Temporary Redirect`, which keeps the request method
/// intact for clients that follow the link with something other than GET.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.link_service.resolve(&code).await?;

    Ok(Redirect::temporary(&original_url))
}
