use uuid::Uuid;

use crate::{
    model::society::{JoinOutcome, JoinRequestStatus},
    server::{
        error::{society::SocietyError, AppError},
        model::society::tests::flat_param,
        service::{occupancy::OccupancyService, society::SocietyService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod pending_requests;
mod respond_to_join_request;

/// Creates a society with wing `wing_name` → floor 1 → flat "101" and returns the flat ID.
async fn seed_flat(
    db: &sea_orm::DatabaseConnection,
    wing_name: &str,
) -> Result<Uuid, AppError> {
    let (_, society) = factory::helpers::create_society_with_owner(db).await?;
    let service = SocietyService::new(db);

    let wing = service.add_wing(society.id, wing_name.to_string()).await?;
    service.add_floor(society.id, wing.id, 1).await?;
    let flat = service
        .add_flat(society.id, wing.id, 1, flat_param("101"))
        .await?;

    Ok(flat.id)
}
