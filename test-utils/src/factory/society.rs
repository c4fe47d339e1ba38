//! Society factory for creating test society aggregates.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test societies with customizable fields.
///
/// The wings tree defaults to an empty JSON array. Pass a raw document with
/// `wings()` to seed a prebuilt tree.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::society::SocietyFactory;
///
/// let society = SocietyFactory::new(&db, owner.id)
///     .name("Green Acres")
///     .registration_number("REG-42")
///     .build()
///     .await?;
/// ```
pub struct SocietyFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    registration_number: String,
    wings: serde_json::Value,
}

impl<'a> SocietyFactory<'a> {
    /// Creates a new SocietyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Society {id}"`
    /// - registration_number: `"REG-{id}"`
    /// - wings: `[]`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Society {}", id),
            registration_number: format!("REG-{}", id),
            wings: serde_json::json!([]),
        }
    }

    /// Sets the society name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the registration number.
    pub fn registration_number(mut self, registration_number: impl Into<String>) -> Self {
        self.registration_number = registration_number.into();
        self
    }

    /// Sets the raw wings document.
    pub fn wings(mut self, wings: serde_json::Value) -> Self {
        self.wings = wings;
        self
    }

    /// Builds and inserts the society entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::society::Model)` - Created society entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::society::Model, DbErr> {
        let now = Utc::now();
        entity::society::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set("1 Test Street".to_string()),
            registration_number: ActiveValue::Set(self.registration_number),
            owner_id: ActiveValue::Set(self.owner_id),
            amenities: ActiveValue::Set(serde_json::json!([])),
            maintenance_fee: ActiveValue::Set(0.0),
            rules: ActiveValue::Set(serde_json::json!([])),
            contact_phone: ActiveValue::Set(None),
            contact_email: ActiveValue::Set(None),
            logo: ActiveValue::Set(None),
            status: ActiveValue::Set(true),
            wings: ActiveValue::Set(self.wings),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a society with default values owned by `owner_id`.
pub async fn create_society(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::society::Model, DbErr> {
    SocietyFactory::new(db, owner_id).build().await
}
