//! Application error type and its HTTP representation.
//!
//! Every fallible operation in the crate returns [`AppError`]. The four
//! variants map one-to-one onto HTTP status codes when an error reaches the
//! API layer:
//!
//! | Variant      | Status | Raised for                                   |
//! |--------------|--------|----------------------------------------------|
//! | `Validation` | 400    | malformed input, invalid aliases             |
//! | `NotFound`   | 404    | absent, expired or deleted links             |
//! | `Conflict`   | 409    | alias already in use, unique violations      |
//! | `Internal`   | 500    | storage failures, code space exhaustion      |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Error body rendered for failed requests.
///
/// ```json
/// { "success": false, "message": "...", "error": { "code": "conflict", "details": {} } }
/// ```
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    error: ErrorInfo,
}

/// Machine-readable part of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
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

    /// A caller-supplied alias failed the length or charset check.
    pub fn invalid_alias(alias: &str, reason: impl Into<String>) -> Self {
        Self::bad_request(reason, json!({ "alias": alias }))
    }

    /// A caller-supplied alias is already owned by another link.
    pub fn alias_in_use(alias: &str) -> Self {
        Self::conflict("Alias is already in use", json!({ "alias": alias }))
    }

    /// No live link exists for the code.
    pub fn link_not_found(code: &str) -> Self {
        Self::not_found(
            "Short link not found or expired",
            json!({ "code": code }),
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the machine-readable code and details of this error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            Self::Validation { details, .. } => ("validation_error", details),
            Self::NotFound { details, .. } => ("not_found", details),
            Self::Conflict { details, .. } => ("conflict", details),
            Self::Internal { details, .. } => ("internal_error", details),
        };

        ErrorInfo {
            code,
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, details } = &self {
            tracing::error!(%message, %details, "Request failed with internal error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            success: false,
            error: self.to_error_info(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Malformed JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
