use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::response::MessageResponse;

/// Error a handler raises on purpose. Rendered as `{"message": ..}` plus any
/// payload fields, with `status` as the HTTP status.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: StatusCode,
    pub payload: Option<Map<String, Value>>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::BAD_REQUEST,
            payload: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message).with_status(StatusCode::NOT_FOUND)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Payload fields with `message` set last, so it can't be shadowed.
    pub fn to_json(&self) -> Value {
        let mut body = self.payload.clone().unwrap_or_default();
        body.insert("message".to_string(), Value::String(self.message.clone()));
        Value::Object(body)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Api(err) => {
                tracing::debug!(status = %err.status, message = %err.message, "request rejected");
                (err.status, axum::Json(err.to_json())).into_response()
            }
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "database error");
                internal_error()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(MessageResponse::new("Internal Server Error")),
    )
        .into_response()
}

pub type AppResult<T> = Result<T, AppError>;
