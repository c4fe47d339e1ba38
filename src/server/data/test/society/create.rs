use super::*;

/// Tests creating a society.
///
/// Expected: Ok with an empty tree at version 0 and all fields stored
#[tokio::test]
async fn creates_society_with_empty_tree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = SocietyRepository::new(db);
    let society = repo.create(create_param(owner.id, "REG-100")).await?;

    assert_eq!(society.owner_id, owner.id);
    assert!(society.wings.is_empty());
    assert_eq!(society.version, 0);
    assert!(society.status);
    assert_eq!(society.amenities, vec!["Pool"]);
    assert_eq!(society.contact.phone.as_deref(), Some("9000011111"));

    let stored = repo.find_by_id(society.id).await?.unwrap();
    assert_eq!(stored, society);

    Ok(())
}

/// Tests that registration numbers are unique across societies.
///
/// Expected: Err(BadRequest) for the second society
#[tokio::test]
async fn rejects_duplicate_registration_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = SocietyRepository::new(db);
    repo.create(create_param(owner.id, "REG-DUP")).await?;
    let result = repo.create(create_param(owner.id, "REG-DUP")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
