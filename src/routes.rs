//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /`              - Health check
//! - `POST   /shorten`       - Create a short link
//! - `GET    /stats/{code}`  - Link statistics
//! - `GET    /{code}`        - Short link redirect
//! - `DELETE /{code}`        - Delete a short link
//!
//! Every request passes through the [`crate::api::middleware::tracing`] layer.

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}
