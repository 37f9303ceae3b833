//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "abc123",
///   "original_url": "https://example.com/",
///   "clicks": 2,
///   "created_at": "2024-06-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.link_service.stats(&code).await?;
    tracing::info!(code = %code, "Stats requested");

    Ok(Json(record.into()))
}
