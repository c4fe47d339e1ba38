//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a society together with the user that owns it.
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize specific fields.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, society))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_society_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::society::Model), DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let society = crate::factory::society::create_society(db, owner.id).await?;

    Ok((owner, society))
}
