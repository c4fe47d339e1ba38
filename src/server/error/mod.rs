//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every controller. It wraps the
//! domain-specific errors (`AuthError`, `ConfigError`, `SocietyError`) and maps each
//! variant onto an HTTP status with an `{"error": "..."}` body. Storage and other
//! unexpected failures are logged server-side and reported to the client with a
//! generic message.

pub mod auth;
pub mod config;
pub mod society;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, society::SocietyError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Failure resolving or mutating a society tree.
    ///
    /// Missing nodes map to 404, an unknown join-response action to 400.
    #[error(transparent)]
    SocietyErr(#[from] SocietyError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// A stored JSON document could not be encoded or decoded.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// I/O error, typically binding the listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error. Results in 400 Bad Request.
    ///
    /// Used for every validation failure: required fields, patterns, enum
    /// membership and uniqueness.
    #[error("{0}")]
    BadRequest(String),

    /// The aggregate changed between load and save. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Translates a store error, turning unique-index violations into a
    /// `BadRequest` carrying `message`.
    pub fn unique_violation(err: DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::BadRequest(message.to_string()),
            _ => Self::DbErr(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::SocietyErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" body so
/// implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
