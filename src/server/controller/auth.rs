use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, LoginResponseDto, RegisterUserDto, UserResultDto},
    },
    server::{
        error::AppError, model::user::RegisterUserParam, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// Validates the profile, hashes the password and stores the user. Role defaults to
/// `resident` and country code to `+91`. No authentication required.
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Validation failure or email/phone already registered
/// - `500 Internal Server Error` - Hashing or database error
#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserResultDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterUserParam::from_dto(payload)?;

    let user = AuthService::new(&state.db, &state.tokens)
        .register(param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResultDto {
            message: "User registered successfully".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Log in with an email address or phone number.
///
/// # Returns
/// - `200 OK` - Bearer token and the user's profile
/// - `401 Unauthorized` - Wrong password
/// - `404 Not Found` - No user with that email or phone
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let identifier = payload.identifier.trim();
    if identifier.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Identifier and password are required".to_string(),
        ));
    }

    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .login(identifier, payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}
