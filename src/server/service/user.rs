//! User service for profile management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParam, User, UserFilter},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_id(id).await
    }

    pub async fn get_all_users(&self, filter: &UserFilter) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).find_all(filter).await
    }

    /// Applies a partial profile update.
    ///
    /// A new email or phone must not belong to any other user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Email or phone already in use
    pub async fn update_user(
        &self,
        id: i32,
        param: UpdateUserParam,
    ) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(email) = &param.email {
            if let Some(other) = user_repo.find_by_email(email).await? {
                if other.id != id {
                    return Err(AppError::BadRequest("Email is already in use".to_string()));
                }
            }
        }
        if let Some(phone) = &param.phone {
            if let Some(other) = user_repo.find_by_phone(phone).await? {
                if other.id != id {
                    return Err(AppError::BadRequest(
                        "Phone number is already in use".to_string(),
                    ));
                }
            }
        }

        user_repo.update(id, param).await
    }

    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete_user(&self, id: i32) -> Result<bool, AppError> {
        UserRepository::new(self.db).delete(id).await
    }
}
