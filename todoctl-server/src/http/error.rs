//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Response bodies carry a short operation-labeled message only; the
//! underlying cause is logged server-side.

use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;

/// Operation a failure happened in, used to label messages and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Finding,
    Adding,
    Updating,
    Deleting,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Finding => "finding",
            Self::Adding => "adding",
            Self::Updating => "updating",
            Self::Deleting => "deleting",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Undecodable body, bad identity, or write rejected by storage (400)
    BadRequest { message: String },

    /// Nothing found, or a read that failed (404)
    NotFound { message: String },

    /// Delete blocked by a row still referencing the target (409)
    Conflict { message: String },
}

impl ApiError {
    /// Request body could not be decoded.
    pub fn decode(operation: Operation, resource: &'static str, rejection: JsonRejection) -> Self {
        tracing::warn!(
            operation = operation.as_str(),
            resource,
            error = %rejection.body_text(),
            "Error decoding {} details",
            resource
        );
        Self::BadRequest {
            message: format!("error {} {}", operation, resource),
        }
    }

    /// A list or get failed; every read failure is reported as not found.
    pub fn read(resource: &'static str, id: Option<i32>, err: DbError) -> Self {
        match &err {
            DbError::NotFound { .. } => {
                tracing::info!(resource, id = ?id, "No {} found", resource)
            }
            _ => tracing::warn!(resource, id = ?id, error = %err, "Error retrieving {}", resource),
        }
        Self::NotFound {
            message: format!("error finding {}", resource),
        }
    }

    /// A create, update or delete failed.
    pub fn write(
        operation: Operation,
        resource: &'static str,
        id: Option<i32>,
        err: DbError,
    ) -> Self {
        tracing::warn!(
            operation = operation.as_str(),
            resource,
            id = ?id,
            error = %err,
            "Error {} {}",
            operation,
            resource
        );

        if matches!(err, DbError::NotFound { .. }) {
            return Self::NotFound {
                message: format!("error finding {}", resource),
            };
        }

        if operation == Operation::Deleting && err.is_foreign_key_violation() {
            return Self::Conflict {
                message: format!("error deleting {}: still referenced", resource),
            };
        }

        Self::BadRequest {
            message: format!("error {} {}", operation, resource),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad_request",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest { message } | Self::NotFound { message } | Self::Conflict { message } => {
                message
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": self.kind(),
            "message": self.message()
        });

        (self.status(), Json(body)).into_response()
    }
}
