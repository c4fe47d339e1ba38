//! User data repository for database operations.
//!
//! Provides `UserRepository` for creating, querying, updating and deleting user
//! records, converting entity models to `User` domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User, UserFilter},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Callers check email and phone uniqueness beforehand so they can name the
    /// clashing field; a unique-index violation that slips past those checks is
    /// still reported as a `BadRequest`.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email or phone already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            country_code: ActiveValue::Set(param.country_code),
            phone: ActiveValue::Set(param.phone),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            has_pet: ActiveValue::Set(param.has_pet),
            blood_group: ActiveValue::Set(param.blood_group.map(|b| b.as_str().to_string())),
            occupation: ActiveValue::Set(param.occupation),
            interests: ActiveValue::Set(serde_json::to_value(param.interests)?),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| AppError::unique_violation(e, "Email or phone number is already registered"))?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database or conversion error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Phone.eq(phone))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user whose email or phone equals `identifier`.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Email.eq(identifier))
                    .add(entity::user::Column::Phone.eq(identifier)),
            )
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Lists users matching every filter that is set, ordered by ID.
    pub async fn find_all(&self, filter: &UserFilter) -> Result<Vec<User>, AppError> {
        let mut query = entity::prelude::User::find();

        if let Some(role) = filter.role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }
        if let Some(has_pet) = filter.has_pet {
            query = query.filter(entity::user::Column::HasPet.eq(has_pet));
        }
        if let Some(blood_group) = filter.blood_group {
            query = query.filter(entity::user::Column::BloodGroup.eq(blood_group.as_str()));
        }

        query
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - New email or phone collides with another user
    /// - `Err(AppError)` - Database or conversion error
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = existing.clone().into_active_model();
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(country_code) = param.country_code {
            active.country_code = ActiveValue::Set(country_code);
        }
        if let Some(role) = param.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(has_pet) = param.has_pet {
            active.has_pet = ActiveValue::Set(has_pet);
        }
        if let Some(blood_group) = param.blood_group {
            active.blood_group = ActiveValue::Set(Some(blood_group.as_str().to_string()));
        }
        if let Some(occupation) = param.occupation {
            active.occupation = ActiveValue::Set(Some(occupation));
        }
        if let Some(interests) = param.interests {
            active.interests = ActiveValue::Set(serde_json::to_value(interests)?);
        }

        if !active.is_changed() {
            return User::from_entity(existing).map(Some);
        }

        let entity = active
            .update(self.db)
            .await
            .map_err(|e| AppError::unique_violation(e, "Email or phone number is already in use"))?;

        User::from_entity(entity).map(Some)
    }

    /// Replaces the stored password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Hash updated
    /// - `Ok(false)` - No user with that ID
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
