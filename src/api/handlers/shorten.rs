//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "my-link"
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "short_url": "http://localhost:8000/my-link",
///   "original_url": "https://example.com/"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the custom code is taken or the body is not JSON
/// - 422 Unprocessable Entity if the URL or custom code is malformed, or a field is missing
/// - 500 Internal Server Error on storage failures
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .shorten(&payload.url, payload.custom_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: link.short_url,
            original_url: link.original_url,
        }),
    ))
}
