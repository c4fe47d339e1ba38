use super::*;

/// Tests that the lowest-ID society with the wing name wins.
///
/// Expected: Ok with the earlier society even though a later one also matches
#[tokio::test]
async fn returns_first_matching_society() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let unrelated = factory::society::SocietyFactory::new(db, owner.id)
        .wings(single_flat_wings("B", uuid::Uuid::new_v4(), "101"))
        .build()
        .await?;
    let first = factory::society::SocietyFactory::new(db, owner.id)
        .wings(single_flat_wings("A", uuid::Uuid::new_v4(), "101"))
        .build()
        .await?;
    factory::society::SocietyFactory::new(db, owner.id)
        .wings(single_flat_wings("A", uuid::Uuid::new_v4(), "101"))
        .build()
        .await?;

    let repo = SocietyRepository::new(db);
    let found = repo.find_first_with_wing_name("A").await?;
    assert_eq!(found.id, first.id);

    let found = repo.find_first_with_wing_name("B").await?;
    assert_eq!(found.id, unrelated.id);

    Ok(())
}

/// Tests searching for a wing name no society has.
///
/// Expected: Err(SocietyNotFound)
#[tokio::test]
async fn fails_when_no_society_has_wing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_society_with_owner(db).await?;

    let repo = SocietyRepository::new(db);
    let result = repo.find_first_with_wing_name("Z").await;

    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::SocietyNotFound))
    ));

    Ok(())
}
