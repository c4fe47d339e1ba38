use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    /// Caller is the given user or an admin.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Authenticates the bearer token and checks every permission.
    ///
    /// The user is re-loaded from the database so a token for a deleted account is
    /// rejected even before it expires.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated caller holding all permissions
    /// - `Err(AuthError::MissingToken | InvalidToken | ExpiredToken)` - Bad credentials
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::Forbidden)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = bearer_token(self.headers)?;
        let claims = self.tokens.verify(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::SelfOrAdmin(target_id) => {
                    if user.id != *target_id && !user.is_admin() {
                        return Err(AuthError::Forbidden(format!(
                            "User {} attempted to modify user {}",
                            user.id, target_id
                        ))
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(AuthError::MissingToken);
    };
    let value = value
        .to_str()
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::MissingToken),
    }
}
