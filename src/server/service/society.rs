//! Society service: society CRUD and wing/floor/flat management.
//!
//! Every tree mutation follows the same shape: load the aggregate, resolve the
//! target node with the navigator, mutate it in memory, then save the whole
//! aggregate. The save is the commit point.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{society::SocietyRepository, user::UserRepository},
    error::{society::SocietyError, AppError},
    model::society::{
        navigator::WingSelector, AddFlatParam, CreateSocietyParam, Flat, Floor, Society,
        UpdateSocietyParam, Wing,
    },
    util::validation::require,
};

pub struct SocietyService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SocietyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a society owned by an existing user.
    ///
    /// # Returns
    /// - `Ok(Society)` - The created society with an empty tree
    /// - `Err(AppError::NotFound)` - Owner does not exist
    /// - `Err(AppError::BadRequest)` - Registration number already in use
    pub async fn create_society(&self, param: CreateSocietyParam) -> Result<Society, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(param.owner_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Owner not found".to_string()));
        }

        let society = SocietyRepository::new(self.db).create(param).await?;

        tracing::info!("Created society {} ({})", society.id, society.registration_number);

        Ok(society)
    }

    pub async fn get_all_societies(&self) -> Result<Vec<Society>, AppError> {
        SocietyRepository::new(self.db).find_all().await
    }

    /// # Returns
    /// - `Ok(Society)` - The aggregate
    /// - `Err(AppError::SocietyErr(SocietyNotFound))` - No society with that ID
    pub async fn get_society(&self, id: i32) -> Result<Society, AppError> {
        SocietyRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| SocietyError::SocietyNotFound.into())
    }

    pub async fn update_society(
        &self,
        id: i32,
        param: UpdateSocietyParam,
    ) -> Result<Society, AppError> {
        let mut society = self.get_society(id).await?;
        society.apply_update(param);

        SocietyRepository::new(self.db).save(society).await
    }

    pub async fn delete_society(&self, id: i32) -> Result<(), AppError> {
        if !SocietyRepository::new(self.db).delete(id).await? {
            return Err(SocietyError::SocietyNotFound.into());
        }

        tracing::info!("Deleted society {}", id);

        Ok(())
    }

    pub async fn add_wing(&self, society_id: i32, wing_name: String) -> Result<Wing, AppError> {
        require("Wing name", &wing_name)?;

        let mut society = self.get_society(society_id).await?;
        let wing = society.add_wing(wing_name);

        SocietyRepository::new(self.db).save(society).await?;

        Ok(wing)
    }

    pub async fn get_wings(&self, society_id: i32) -> Result<Vec<Wing>, AppError> {
        Ok(self.get_society(society_id).await?.wings)
    }

    pub async fn add_floor(
        &self,
        society_id: i32,
        wing_id: Uuid,
        floor_number: i32,
    ) -> Result<Floor, AppError> {
        let mut society = self.get_society(society_id).await?;
        let floor = society
            .wing_mut(WingSelector::Id(wing_id))?
            .add_floor(floor_number);

        SocietyRepository::new(self.db).save(society).await?;

        Ok(floor)
    }

    pub async fn get_floors(&self, society_id: i32, wing_id: Uuid) -> Result<Vec<Floor>, AppError> {
        let society = self.get_society(society_id).await?;
        let wing = society.wing(WingSelector::Id(wing_id))?;

        Ok(wing.floors.clone())
    }

    /// Adds a vacant flat to the first floor numbered `floor_number` in the wing.
    pub async fn add_flat(
        &self,
        society_id: i32,
        wing_id: Uuid,
        floor_number: i32,
        param: AddFlatParam,
    ) -> Result<Flat, AppError> {
        let mut society = self.get_society(society_id).await?;
        let flat = society
            .wing_mut(WingSelector::Id(wing_id))?
            .floor_mut(floor_number)?
            .add_flat(param);

        SocietyRepository::new(self.db).save(society).await?;

        Ok(flat)
    }

    /// Flats of the first floor numbered `floor_number` in the wing.
    pub async fn get_flats(
        &self,
        society_id: i32,
        wing_id: Uuid,
        floor_number: i32,
    ) -> Result<Vec<Flat>, AppError> {
        let society = self.get_society(society_id).await?;
        let floor = society
            .wing(WingSelector::Id(wing_id))?
            .floor(floor_number)?;

        Ok(floor.flats.clone())
    }
}
