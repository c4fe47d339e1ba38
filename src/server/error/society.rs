use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure resolving a path through a society tree or applying an occupancy
/// transition. Each not-found variant names the hop that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SocietyError {
    #[error("Society not found")]
    SocietyNotFound,

    #[error("Wing not found")]
    WingNotFound,

    #[error("Floor not found")]
    FloorNotFound,

    #[error("Flat not found")]
    FlatNotFound,

    #[error("Join request not found")]
    RequestNotFound,

    /// Join-response action other than `accept` or `reject`.
    #[error("Invalid action '{0}', expected 'accept' or 'reject'")]
    InvalidAction(String),
}

impl IntoResponse for SocietyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidAction(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
