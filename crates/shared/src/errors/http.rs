use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    /// Carries the internal detail for the server log only.
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),

            ServiceError::BadRequest(msg) => HttpError::BadRequest(msg),

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Conflict(msg) => HttpError::Conflict(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) | RepositoryError::AlreadyExists(msg) => {
                    HttpError::Conflict(msg)
                }
                other => HttpError::Internal(format!("Repository error: {other}")),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("Invalid token: {err}")),

            ServiceError::Bcrypt(err) => HttpError::Internal(format!("Bcrypt error: {err}")),

            ServiceError::Storage(err) => HttpError::Internal(format!("Storage error: {err}")),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::Internal(detail) => {
                error!("❌ Internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}
