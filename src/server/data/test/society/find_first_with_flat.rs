use super::*;

/// Tests locating the society that holds a flat ID.
///
/// Expected: Ok with the owning society; Err(FlatNotFound) for an unknown ID
#[tokio::test]
async fn finds_society_holding_flat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let flat_id = uuid::Uuid::new_v4();
    factory::society::SocietyFactory::new(db, owner.id)
        .wings(single_flat_wings("A", uuid::Uuid::new_v4(), "101"))
        .build()
        .await?;
    let holder = factory::society::SocietyFactory::new(db, owner.id)
        .wings(single_flat_wings("A", flat_id, "101"))
        .build()
        .await?;

    let repo = SocietyRepository::new(db);
    let found = repo.find_first_with_flat(flat_id).await?;
    assert_eq!(found.id, holder.id);
    assert_eq!(found.flat_by_id(flat_id)?.flat_number, "101");

    let result = repo.find_first_with_flat(uuid::Uuid::new_v4()).await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::FlatNotFound))
    ));

    Ok(())
}
