use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::{http::StatusCode, Json};
use tracing::error;

use crate::models::StandardErrorModel;
use crate::services::RemoteError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Remote(RemoteError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Remote(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(StandardErrorModel { error: message })).into_response()
    }
}

/// Turns a panic caught while serving a request into a 500 error envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    };
    error!(%detail, "recovered from panic while handling request");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(StandardErrorModel {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}

impl From<RemoteError> for AppError {
    fn from(err: RemoteError) -> Self {
        AppError::Remote(err)
    }
}

/// A single problem with one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl From<Vec<FieldError>> for AppError {
    fn from(errors: Vec<FieldError>) -> Self {
        let message = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        AppError::BadRequest(message)
    }
}
