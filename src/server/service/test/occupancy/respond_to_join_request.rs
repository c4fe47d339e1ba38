use super::*;

/// Tests accepting a queued request.
///
/// Expected: Accepted; requester added to family members, request marked accepted
#[tokio::test]
async fn accept_admits_requester() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flat_id = seed_flat(db, "A").await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let service = OccupancyService::new(db);

    service.request_to_join(first.id, "A", 1, "101").await?;
    service.request_to_join(second.id, "A", 1, "101").await?;

    let (status, flat) = service
        .respond_to_join_request(flat_id, second.id, "accept")
        .await?;

    assert_eq!(status, JoinRequestStatus::Accepted);
    let members: Vec<i32> = flat.family_members().iter().map(|m| m.user_id).collect();
    assert_eq!(members, vec![first.id, second.id]);
    assert_eq!(flat.join_requests()[0].status, JoinRequestStatus::Accepted);
    assert!(service.pending_requests("A", 1, "101").await?.is_empty());

    Ok(())
}

/// Tests rejecting a queued request.
///
/// Expected: Rejected; family members unchanged
#[tokio::test]
async fn reject_keeps_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flat_id = seed_flat(db, "A").await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let service = OccupancyService::new(db);

    service.request_to_join(first.id, "A", 1, "101").await?;
    service.request_to_join(second.id, "A", 1, "101").await?;

    let (status, flat) = service
        .respond_to_join_request(flat_id, second.id, "reject")
        .await?;

    assert_eq!(status, JoinRequestStatus::Rejected);
    assert_eq!(flat.family_members().len(), 1);
    assert_eq!(flat.join_requests()[0].status, JoinRequestStatus::Rejected);

    Ok(())
}

/// Tests an unknown action and a missing request.
///
/// Expected: Err(InvalidAction) and Err(RequestNotFound)
#[tokio::test]
async fn invalid_action_and_missing_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flat_id = seed_flat(db, "A").await?;
    let service = OccupancyService::new(db);

    let result = service
        .respond_to_join_request(flat_id, 1, "maybe")
        .await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::InvalidAction(_)))
    ));

    let result = service
        .respond_to_join_request(flat_id, 12345, "accept")
        .await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::RequestNotFound))
    ));

    let result = service
        .respond_to_join_request(Uuid::new_v4(), 12345, "reject")
        .await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::FlatNotFound))
    ));

    Ok(())
}
