//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Failures raised by the resource engine. Driver errors pass through untouched.
#[derive(Error, Debug)]
pub enum OrmError {
    #[error("model shape: {0}")]
    Shape(String),
    #[error("service for table '{table}' failed to set up or is in failed state")]
    Setup { table: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no row in '{table}' matched")]
    NotFound { table: String },
    #[error("scan: {0}")]
    Scan(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl OrmError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrmError::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Orm(#[from] OrmError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    fn body(&self, code: &str) -> ErrorBody {
        ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        }
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Orm(e) => match e {
                OrmError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
                OrmError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
                OrmError::Setup { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "setup_error"),
                OrmError::Shape(_) => (StatusCode::INTERNAL_SERVER_ERROR, "shape_error"),
                OrmError::Scan(_) => (StatusCode::INTERNAL_SERVER_ERROR, "scan_error"),
                OrmError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            },
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "request failed");
        }
        (status, Json(self.body(code))).into_response()
    }
}
