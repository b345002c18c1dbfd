//! # API Errors
//!
//! Every failure leaves the API through one envelope:
//!
//! ```json
//! {"error": {"message": "...", "status_code": 404, "error_code": "CARD_NOT_FOUND",
//!            "timestamp": "...", "...": "context"}}
//! ```

use super::types::{ErrorBody, ErrorEnvelope, now_timestamp};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cardshop_core::CatalogError;
use serde_json::{Map, Value, json};
use thiserror::Error;

/// Request-level errors, each with a stable machine-readable code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Card not found with ID: {0}")]
    CardNotFound(u64),

    #[error("Invalid value for parameter '{name}': {value}")]
    InvalidParameter { name: String, value: String },

    /// No route matches the request path.
    #[error("Resource not found")]
    NotFound { url: String },

    #[error("Method {method} not allowed")]
    MethodNotAllowed { method: String, url: String },

    #[error("Debug endpoint not available in production")]
    DebugDisabled,

    #[error("Too many requests")]
    RateLimited,

    /// Anything unexpected. The detail is logged, never returned.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidSection(_) | ApiError::InvalidParameter { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::SectionNotFound(_) | ApiError::CardNotFound(_) | ApiError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::DebugDisabled => StatusCode::FORBIDDEN,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidSection(_) => "INVALID_SECTION",
            ApiError::SectionNotFound(_) => "SECTION_NOT_FOUND",
            ApiError::CardNotFound(_) => "CARD_NOT_FOUND",
            ApiError::InvalidParameter { .. } => "INVALID_PARAMETER",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::DebugDisabled => "DEBUG_DISABLED",
            ApiError::RateLimited => "RATE_LIMITED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Extra fields merged into the error body.
    fn context(&self) -> Map<String, Value> {
        let context = match self {
            ApiError::NotFound { url } => json!({ "requested_url": url }),
            ApiError::MethodNotAllowed { method, url } => {
                json!({ "method": method, "requested_url": url })
            }
            ApiError::InvalidParameter { name, value } => {
                json!({ "parameter": name, "value": value })
            }
            _ => return Map::new(),
        };
        match context {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Build the envelope without turning it into a response.
    #[must_use]
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorBody {
                message: self.to_string(),
                status_code: self.status().as_u16(),
                error_code: self.code().to_string(),
                timestamp: now_timestamp(),
                context: self.context(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => {
                tracing::error!(error_code = self.code(), detail = %detail, "Internal error");
            }
            _ => {
                tracing::warn!(
                    error_code = self.code(),
                    status = status.as_u16(),
                    "API error: {}",
                    self
                );
            }
        }

        (status, Json(self.envelope())).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidSection(name) => ApiError::InvalidSection(name),
            CatalogError::SectionNotFound(section) => ApiError::SectionNotFound(section.to_string()),
            CatalogError::CardNotFound(id) => ApiError::CardNotFound(id.value()),
            CatalogError::InvalidParameter { name, value } => {
                ApiError::InvalidParameter { name, value }
            }
            other @ (CatalogError::UnknownCategory { .. } | CatalogError::DuplicateCardId(_)) => {
                ApiError::Internal(other.to_string())
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
