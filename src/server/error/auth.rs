use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("No token provided")]
    MissingToken,

    /// Token signature or structure could not be verified.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token verified but its `exp` claim has passed.
    #[error("Token expired")]
    ExpiredToken,

    /// Token subject refers to a user that no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Supplied password did not match the stored hash.
    ///
    /// Carries the client-facing message.
    #[error("{0}")]
    WrongPassword(String),

    /// Authenticated user lacks permission for the operation.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Password hashing or token signing failed.
    #[error("Credential error: {0}")]
    Credential(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `ExpiredToken` / `UserNotInDatabase` → 401
/// - `WrongPassword` → 401 with its message
/// - `Forbidden` → 403
/// - `Credential` → 500 with a generic message
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "No token, authorization denied".to_string(),
            ),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Token is not valid".to_string())
            }
            Self::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired".to_string()),
            Self::WrongPassword(message) => (StatusCode::UNAUTHORIZED, message),
            Self::Forbidden(_) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action".to_string(),
            ),
            Self::Credential(err) => {
                tracing::error!("Credential error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
