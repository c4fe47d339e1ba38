use super::*;

/// Tests creating a society for an existing owner.
///
/// Expected: Ok with an empty wings tree
#[tokio::test]
async fn creates_society_for_existing_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let society = SocietyService::new(db)
        .create_society(create_param(owner.id))
        .await?;

    assert_eq!(society.owner_id, owner.id);
    assert!(society.wings.is_empty());
    assert!(society.status);

    Ok(())
}

/// Tests creating a society whose owner does not exist.
///
/// Expected: Err(NotFound("Owner not found"))
#[tokio::test]
async fn rejects_missing_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SocietyService::new(db)
        .create_society(create_param(999))
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Owner not found"),
        other => panic!("unexpected result: {:?}", other.map(|s| s.id)),
    }

    Ok(())
}

/// Tests deleting a society twice.
///
/// Expected: Ok first, then Err(SocietyNotFound)
#[tokio::test]
async fn delete_of_missing_society_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, society) = factory::helpers::create_society_with_owner(db).await?;
    let service = SocietyService::new(db);

    service.delete_society(society.id).await?;
    let result = service.delete_society(society.id).await;

    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::SocietyNotFound))
    ));

    Ok(())
}
