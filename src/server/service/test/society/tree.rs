use super::*;

/// Tests building wing → floor → flat through the service and reading it back.
///
/// Expected: each level persisted and listed from storage
#[tokio::test]
async fn builds_and_lists_tree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, society) = factory::helpers::create_society_with_owner(db).await?;
    let service = SocietyService::new(db);

    let wing = service.add_wing(society.id, "A".to_string()).await?;
    let floor = service.add_floor(society.id, wing.id, 3).await?;
    let flat = service
        .add_flat(society.id, wing.id, 3, flat_param("301"))
        .await?;

    let wings = service.get_wings(society.id).await?;
    assert_eq!(wings.len(), 1);
    assert_eq!(wings[0].wing_name, "A");

    let floors = service.get_floors(society.id, wing.id).await?;
    assert_eq!(floors.len(), 1);
    assert_eq!(floors[0].id, floor.id);

    let flats = service.get_flats(society.id, wing.id, 3).await?;
    assert_eq!(flats.len(), 1);
    assert_eq!(flats[0].id, flat.id);
    assert!(!flats[0].is_occupied());

    Ok(())
}

/// Tests adding a wing with a blank name.
///
/// Expected: Err(BadRequest("Wing name is required"))
#[tokio::test]
async fn rejects_blank_wing_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, society) = factory::helpers::create_society_with_owner(db).await?;

    let result = SocietyService::new(db)
        .add_wing(society.id, "  ".to_string())
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Wing name is required"),
        other => panic!("unexpected result: {:?}", other.map(|w| w.id)),
    }

    Ok(())
}

/// Tests each missing hop when addressing the tree.
///
/// Expected: SocietyNotFound, WingNotFound, then FloorNotFound
#[tokio::test]
async fn missing_nodes_are_reported_per_level() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, society) = factory::helpers::create_society_with_owner(db).await?;
    let service = SocietyService::new(db);
    let wing = service.add_wing(society.id, "A".to_string()).await?;

    let result = service.get_wings(society.id + 1).await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::SocietyNotFound))
    ));

    let result = service.add_floor(society.id, Uuid::new_v4(), 1).await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::WingNotFound))
    ));

    let result = service
        .add_flat(society.id, wing.id, 9, flat_param("901"))
        .await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::FloorNotFound))
    ));

    Ok(())
}
