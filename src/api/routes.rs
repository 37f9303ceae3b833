//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET    /`              - Health check
/// - `POST   /shorten`       - Create a short link
/// - `GET    /stats/{code}`  - Statistics for a short link
/// - `GET    /{code}`        - Redirect to the original URL
/// - `DELETE /{code}`        - Delete a short link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler).delete(delete_link_handler))
}
