//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response Codes
///
/// - **200 OK**: Database reachable
/// - **503 Service Unavailable**: Database check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "message": "URL Shortener API is running",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    tracing::debug!("Health check requested");

    let database = check_database(&state).await;
    let healthy = database.status == "ok";

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        message: if healthy {
            "URL Shortener API is running"
        } else {
            "URL Shortener API cannot reach its database"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { database },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.link_service.check_storage().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    }
}
