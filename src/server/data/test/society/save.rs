use super::*;

/// Tests saving a mutated aggregate.
///
/// Expected: Ok with the tree persisted and the version bumped
#[tokio::test]
async fn persists_tree_and_bumps_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, entity) = factory::helpers::create_society_with_owner(db).await?;

    let repo = SocietyRepository::new(db);
    let mut society = repo.find_by_id(entity.id).await?.unwrap();
    let wing = society.add_wing("A".to_string());

    let saved = repo.save(society).await?;
    assert_eq!(saved.version, 1);

    let stored = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.version, 1);
    assert_eq!(stored.wings.len(), 1);
    assert_eq!(stored.wings[0].id, wing.id);
    assert_eq!(stored.wings[0].wing_name, "A");

    Ok(())
}

/// Tests that a stale aggregate cannot overwrite a newer save.
///
/// Two copies are loaded at the same version; the first save wins and the second
/// is rejected, so the first writer's wing survives.
///
/// Expected: Err(Conflict) for the stale copy
#[tokio::test]
async fn rejects_stale_save() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, entity) = factory::helpers::create_society_with_owner(db).await?;

    let repo = SocietyRepository::new(db);
    let mut first = repo.find_by_id(entity.id).await?.unwrap();
    let mut second = repo.find_by_id(entity.id).await?.unwrap();

    first.add_wing("A".to_string());
    repo.save(first).await?;

    second.add_wing("B".to_string());
    let result = repo.save(second).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let stored = repo.find_by_id(entity.id).await?.unwrap();
    assert_eq!(stored.wings.len(), 1);
    assert_eq!(stored.wings[0].wing_name, "A");

    Ok(())
}

/// Tests that saving a new registration number respects uniqueness.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_duplicate_registration_on_save() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let taken = factory::society::SocietyFactory::new(db, owner.id)
        .registration_number("REG-TAKEN")
        .build()
        .await?;
    let other = factory::create_society(db, owner.id).await?;

    let repo = SocietyRepository::new(db);
    let mut society = repo.find_by_id(other.id).await?.unwrap();
    society.registration_number = taken.registration_number;

    let result = repo.save(society).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
