//! Join-request workflow across the society forest.
//!
//! Requests address a flat by wing name, floor number and flat number, resolved in
//! the first society (by ID) that has a wing with that name. Responses address the
//! flat by its ID anywhere in the forest.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::society::{JoinOutcome, JoinRequestStatus},
    server::{
        data::{society::SocietyRepository, user::UserRepository},
        error::AppError,
        model::{
            society::{
                navigator::FlatPath, occupancy::JoinAction, FamilyMember, Flat, JoinRequest,
            },
            user::User,
        },
    },
};

pub struct OccupancyService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> OccupancyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Joins a vacant flat immediately or queues a pending request on an occupied one.
    ///
    /// # Returns
    /// - `Ok((JoinOutcome, Flat))` - Outcome and the flat after the transition
    /// - `Err(AppError::NotFound)` - Requester does not exist
    /// - `Err(AppError::SocietyErr)` - No society has the wing, or floor/flat missing
    /// - `Err(AppError::Conflict)` - The society changed while the request was applied
    pub async fn request_to_join(
        &self,
        requester_id: i32,
        wing_name: &str,
        floor_number: i32,
        flat_number: &str,
    ) -> Result<(JoinOutcome, Flat), AppError> {
        let requester = self.load_user(requester_id).await?;

        let society_repo = SocietyRepository::new(self.db);
        let mut society = society_repo.find_first_with_wing_name(wing_name).await?;

        let path = FlatPath::by_name(wing_name, floor_number, flat_number);
        let flat = society.locate_flat_mut(&path)?;
        let outcome = flat.request_to_join(FamilyMember::tenant(&requester), Utc::now());
        let flat = flat.clone();

        let society = society_repo.save(society).await?;

        tracing::info!(
            "User {} request on flat {} in society {}: {:?}",
            requester_id,
            flat.id,
            society.id,
            outcome
        );

        Ok((outcome, flat))
    }

    /// Accepts or rejects the first join request `user_id` made on flat `flat_id`.
    ///
    /// The action is parsed before anything is loaded, so an unknown action never
    /// touches storage.
    ///
    /// # Returns
    /// - `Ok((JoinRequestStatus, Flat))` - New request status and the flat after the transition
    /// - `Err(AppError::SocietyErr(InvalidAction))` - Action is not `accept` or `reject`
    /// - `Err(AppError::SocietyErr(FlatNotFound | RequestNotFound))` - Nothing to respond to
    /// - `Err(AppError::NotFound)` - Accepted requester no longer exists
    pub async fn respond_to_join_request(
        &self,
        flat_id: Uuid,
        user_id: i32,
        action: &str,
    ) -> Result<(JoinRequestStatus, Flat), AppError> {
        let action: JoinAction = action.parse()?;

        let society_repo = SocietyRepository::new(self.db);
        let mut society = society_repo.find_first_with_flat(flat_id).await?;
        society.flat_by_id(flat_id)?.join_request(user_id)?;

        let status = match action {
            JoinAction::Accept => {
                let requester = self.load_user(user_id).await?;
                society
                    .flat_by_id_mut(flat_id)?
                    .accept_join_request(FamilyMember::tenant(&requester))?;
                JoinRequestStatus::Accepted
            }
            JoinAction::Reject => {
                society.flat_by_id_mut(flat_id)?.reject_join_request(user_id)?;
                JoinRequestStatus::Rejected
            }
        };
        let flat = society.flat_by_id(flat_id)?.clone();

        society_repo.save(society).await?;

        tracing::info!(
            "Join request of user {} on flat {} {}ed",
            user_id,
            flat_id,
            action.as_str()
        );

        Ok((status, flat))
    }

    /// Pending requests on the addressed flat.
    pub async fn pending_requests(
        &self,
        wing_name: &str,
        floor_number: i32,
        flat_number: &str,
    ) -> Result<Vec<JoinRequest>, AppError> {
        let society = SocietyRepository::new(self.db)
            .find_first_with_wing_name(wing_name)
            .await?;
        let path = FlatPath::by_name(wing_name, floor_number, flat_number);

        Ok(society
            .locate_flat(&path)?
            .pending_join_requests()
            .into_iter()
            .cloned()
            .collect())
    }

    async fn load_user(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
