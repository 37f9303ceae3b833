//! Handlers for link management endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /{code}`
///
/// Returns `204 No Content`. Subsequent redirects and stats lookups for the
/// code return 404.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
