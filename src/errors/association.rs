use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use super::{ApiError, AppError};
use crate::config::ErrorResponseMode;

/// Errors raised while linking students to mentors or reading the links
#[derive(Error, Debug)]
pub enum AssociationError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Mentor reference {id} does not resolve to a mentor")]
    InvalidReference { id: String },

    #[error("Record store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Malformed request body: {message}")]
    MalformedBody { message: String },
}

impl AppError for AssociationError {
    fn status_code(&self) -> StatusCode {
        match self {
            AssociationError::NotFound { .. } => StatusCode::NOT_FOUND,
            AssociationError::InvalidReference { .. } => StatusCode::BAD_REQUEST,
            AssociationError::StoreUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AssociationError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn user_message(&self) -> String {
        match self {
            AssociationError::NotFound { entity, .. } => format!("{} not found", entity),
            AssociationError::InvalidReference { .. } => "Mentor reference is invalid".to_string(),
            AssociationError::StoreUnavailable { .. } => "Record store is unavailable".to_string(),
            AssociationError::MalformedBody { .. } => "Request body could not be read".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AssociationError::NotFound { .. } => "NOT_FOUND",
            AssociationError::InvalidReference { .. } => "INVALID_REFERENCE",
            AssociationError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            AssociationError::MalformedBody { .. } => "BAD_REQUEST",
        }
    }
}

/// Convenience methods for creating common association errors
impl AssociationError {
    pub fn student_not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { entity: "Student", id: id.into() }
    }

    pub fn invalid_reference<S: Into<String>>(id: S) -> Self {
        Self::InvalidReference { id: id.into() }
    }

    pub fn store(error: anyhow::Error) -> Self {
        Self::StoreUnavailable { message: format!("{:#}", error) }
    }
}

impl From<ApiError> for AssociationError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::BadRequest { message } => Self::MalformedBody { message },
        }
    }
}

/// A failed endpoint: the static per-operation message clients see, plus
/// the typed cause used to pick the status code.
#[derive(Debug)]
pub struct OperationFailure {
    pub operation: &'static str,
    pub cause: AssociationError,
    pub mode: ErrorResponseMode,
}

impl OperationFailure {
    pub fn new(operation: &'static str, cause: AssociationError, mode: ErrorResponseMode) -> Self {
        Self { operation, cause, mode }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.mode {
            ErrorResponseMode::Typed => self.cause.status_code(),
            ErrorResponseMode::Uniform => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OperationFailure {
    fn into_response(self) -> Response {
        match &self.cause {
            AssociationError::StoreUnavailable { .. } => {
                tracing::error!("{}: {}", self.operation, self.cause)
            }
            _ => tracing::warn!("{}: {}", self.operation, self.cause),
        }

        let status = self.status_code();
        let body = Json(json!({
            "error": self.operation,
            "code": self.cause.error_code(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
