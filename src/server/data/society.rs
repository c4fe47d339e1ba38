//! Society aggregate repository.
//!
//! A society row holds the whole wings → floors → flats tree as one JSON document,
//! so the aggregate is always loaded and saved as a unit. Saves are conditional on
//! the `version` the aggregate was loaded at; a concurrent writer that got there
//! first turns the save into `AppError::Conflict` instead of being overwritten.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::society::{navigator, CreateSocietyParam, Society},
};

const DUPLICATE_REGISTRATION: &str = "Registration number is already registered";

pub struct SocietyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SocietyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new society with an empty wings tree.
    ///
    /// # Returns
    /// - `Ok(Society)` - The created society at version 0
    /// - `Err(AppError::BadRequest)` - Registration number already in use
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, param: CreateSocietyParam) -> Result<Society, AppError> {
        let now = Utc::now();
        let entity = entity::society::ActiveModel {
            name: ActiveValue::Set(param.name),
            address: ActiveValue::Set(param.address),
            registration_number: ActiveValue::Set(param.registration_number),
            owner_id: ActiveValue::Set(param.owner_id),
            amenities: ActiveValue::Set(serde_json::to_value(param.amenities)?),
            maintenance_fee: ActiveValue::Set(param.maintenance_fee),
            rules: ActiveValue::Set(serde_json::to_value(param.rules)?),
            contact_phone: ActiveValue::Set(param.contact.phone),
            contact_email: ActiveValue::Set(param.contact.email),
            logo: ActiveValue::Set(param.logo),
            status: ActiveValue::Set(true),
            wings: ActiveValue::Set(serde_json::json!([])),
            version: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| AppError::unique_violation(e, DUPLICATE_REGISTRATION))?;

        Society::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Society>, AppError> {
        entity::prelude::Society::find_by_id(id)
            .one(self.db)
            .await?
            .map(Society::from_entity)
            .transpose()
    }

    /// Loads every society in ascending ID order.
    ///
    /// Forest-wide searches rely on this order for their first-match semantics.
    pub async fn find_all(&self) -> Result<Vec<Society>, AppError> {
        entity::prelude::Society::find()
            .order_by_asc(entity::society::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Society::from_entity)
            .collect()
    }

    /// First society, by ID, that has a wing named `wing_name`.
    ///
    /// # Returns
    /// - `Ok(Society)` - Matching aggregate
    /// - `Err(AppError::SocietyErr(SocietyNotFound))` - No society has such a wing
    pub async fn find_first_with_wing_name(&self, wing_name: &str) -> Result<Society, AppError> {
        let societies = self.find_all().await?;
        Ok(navigator::first_with_wing_named(societies, wing_name)?)
    }

    /// First society, by ID, whose tree contains the flat `flat_id`.
    ///
    /// # Returns
    /// - `Ok(Society)` - Matching aggregate
    /// - `Err(AppError::SocietyErr(FlatNotFound))` - No society contains the flat
    pub async fn find_first_with_flat(&self, flat_id: Uuid) -> Result<Society, AppError> {
        let societies = self.find_all().await?;
        Ok(navigator::first_with_flat(societies, flat_id)?)
    }

    /// Persists the whole aggregate if it is still at the version it was loaded at.
    ///
    /// # Returns
    /// - `Ok(Society)` - The saved aggregate with its version bumped
    /// - `Err(AppError::Conflict)` - The row changed or disappeared since it was loaded
    /// - `Err(AppError::BadRequest)` - New registration number already in use
    /// - `Err(AppError)` - Database or encoding error
    pub async fn save(&self, mut society: Society) -> Result<Society, AppError> {
        let now = Utc::now();
        let next_version = society.version + 1;

        let result = entity::prelude::Society::update_many()
            .set(entity::society::ActiveModel {
                name: ActiveValue::Set(society.name.clone()),
                address: ActiveValue::Set(society.address.clone()),
                registration_number: ActiveValue::Set(society.registration_number.clone()),
                owner_id: ActiveValue::Set(society.owner_id),
                amenities: ActiveValue::Set(serde_json::to_value(&society.amenities)?),
                maintenance_fee: ActiveValue::Set(society.maintenance_fee),
                rules: ActiveValue::Set(serde_json::to_value(&society.rules)?),
                contact_phone: ActiveValue::Set(society.contact.phone.clone()),
                contact_email: ActiveValue::Set(society.contact.email.clone()),
                logo: ActiveValue::Set(society.logo.clone()),
                status: ActiveValue::Set(society.status),
                wings: ActiveValue::Set(serde_json::to_value(&society.wings)?),
                version: ActiveValue::Set(next_version),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .filter(entity::society::Column::Id.eq(society.id))
            .filter(entity::society::Column::Version.eq(society.version))
            .exec(self.db)
            .await
            .map_err(|e| AppError::unique_violation(e, DUPLICATE_REGISTRATION))?;

        if result.rows_affected == 0 {
            tracing::info!(
                "Society {} save rejected: not at version {}",
                society.id,
                society.version
            );
            return Err(AppError::Conflict(
                "Society was modified by another request, please retry".to_string(),
            ));
        }

        society.version = next_version;
        society.updated_at = now;

        Ok(society)
    }

    /// Deletes a society and, with it, its whole embedded tree.
    ///
    /// # Returns
    /// - `Ok(true)` - Society deleted
    /// - `Ok(false)` - No society with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Society::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
