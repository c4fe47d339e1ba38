//! Registration, login and password changes.
//!
//! Password hashing is CPU bound, so hashes are computed on Tokio's blocking
//! pool rather than on the request task.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, User},
    service::auth::token::TokenService,
};

/// Service for credential-backed identity operations.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// Email and phone are checked for existing owners first so the error can name
    /// the clashing field.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email or phone already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &param.email {
            if user_repo.find_by_email(email).await?.is_some() {
                return Err(AppError::BadRequest(
                    "Email is already registered".to_string(),
                ));
            }
        }
        if user_repo.find_by_phone(&param.phone).await?.is_some() {
            return Err(AppError::BadRequest(
                "Phone number is already registered".to_string(),
            ));
        }

        let password_hash = hash_blocking(param.password).await?;

        let user = user_repo
            .create(CreateUserParam {
                first_name: param.first_name,
                last_name: param.last_name,
                email: param.email,
                password_hash,
                country_code: param.country_code,
                phone: param.phone,
                role: param.role,
                has_pet: param.has_pet,
                blood_group: param.blood_group,
                occupation: param.occupation,
                interests: param.interests,
            })
            .await?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Authenticates by email or phone and issues a session token.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials verified
    /// - `Err(AppError::NotFound)` - No user with that email or phone
    /// - `Err(AppError::AuthErr(WrongPassword))` - Password mismatch
    pub async fn login(&self, identifier: &str, password: String) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_identifier(identifier).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_blocking(password, user.password_hash.clone()).await? {
            return Err(AuthError::WrongPassword("Invalid password".to_string()).into());
        }

        let token = self.tokens.issue(&user)?;

        Ok((token, user))
    }

    /// Replaces a user's password after verifying the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::AuthErr(WrongPassword))` - Current password mismatch
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: String,
        new_password: String,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_blocking(current_password, user.password_hash).await? {
            return Err(
                AuthError::WrongPassword("Current password is incorrect".to_string()).into(),
            );
        }
        if new_password.trim().is_empty() {
            return Err(AppError::BadRequest("New password is required".to_string()));
        }

        let password_hash = hash_blocking(new_password).await?;
        if !user_repo.update_password(user_id, password_hash).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}

async fn hash_blocking(plaintext: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || password::hash_password(&plaintext))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))??;
    Ok(hash)
}

async fn verify_blocking(plaintext: String, hash: String) -> Result<bool, AppError> {
    let matched = tokio::task::spawn_blocking(move || password::verify_password(&plaintext, &hash))
        .await
        .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))??;
    Ok(matched)
}
