use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{ChangePasswordDto, UpdateUserDto, UserDto, UserFilterQuery, UserResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{UpdateUserParam, UserFilter},
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users, optionally filtered by role, pet ownership and blood group.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching users, ordered by ID
/// - `400 Bad Request` - Unknown role or blood group in the filter
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(UserFilterQuery),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let filter = UserFilter::from_query(query)?;
    let users = UserService::new(&state.db).get_all_users(&filter).await?;

    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match UserService::new(&state.db).get_user(id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Update a user's profile.
///
/// Only the supplied fields change. Email and phone are re-checked against other
/// users and every field validation is re-applied.
///
/// # Access Control
/// - `SelfOrAdmin` - The user themself or an admin
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Validation failure or email/phone in use
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User updated", body = UserResultDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let param = UpdateUserParam::from_dto(payload)?;

    match UserService::new(&state.db).update_user(id, param).await? {
        Some(user) => Ok((
            StatusCode::OK,
            Json(UserResultDto {
                message: "User updated".to_string(),
                user: user.into_dto(),
            }),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Change a user's password.
///
/// # Access Control
/// - `SelfOrAdmin` - The user themself or an admin; the current password is still required
///
/// # Returns
/// - `200 OK` - Password changed
/// - `401 Unauthorized` - Missing token or incorrect current password
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}/change-password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = ChangePasswordDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "New password missing", body = ErrorDto),
        (status = 401, description = "Incorrect current password", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .change_password(id, payload.current_password, payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password changed successfully")),
    ))
}

/// Delete a user.
///
/// # Access Control
/// - `SelfOrAdmin` - The user themself or an admin
///
/// # Returns
/// - `200 OK` - User deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the user nor an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not permitted", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    if !UserService::new(&state.db).delete_user(id).await? {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    tracing::info!("Deleted user {}", id);

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted successfully"))))
}
