//! Error types shared by the store, the service layer and the HTTP handlers.
//!
//! [`StoreError`] is what repositories return; [`AppError`] is what services
//! and handlers return and knows how to render itself as an HTTP response.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

/// Failures reported by a [`crate::domain::repositories::UrlRepository`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The chosen short code is already taken.
    #[error("Short code already exists: {0}")]
    DuplicateCode(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String, details: Value },
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::BadRequest {
            message: message.into(),
            details,
        }
    }
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error category.
    ///
    /// Conflicts are reported as `400 Bad Request`: a taken custom code is
    /// treated as invalid client input.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::BadRequest { message, details } => ("bad_request", message, details),
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateCode(code) => {
                AppError::conflict("Short code already exists", json!({ "code": code }))
            }
            StoreError::Database(e) => {
                tracing::error!(error = %e, "Storage failure");
                AppError::internal("Internal server error", json!({}))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();

        AppError::validation("Request validation failed", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let details = json!({ "reason": rejection.body_text() });

        if rejection.status() == StatusCode::UNPROCESSABLE_ENTITY {
            AppError::validation("Invalid request body", details)
        } else {
            AppError::bad_request("Malformed request body", details)
        }
    }
}
