use super::*;

/// Tests listing pending requests on a flat nobody has asked for.
///
/// Expected: Ok with an empty list; FlatNotFound for an unknown flat number
#[tokio::test]
async fn lists_no_requests_for_untouched_flat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_flat(db, "B").await?;
    let service = OccupancyService::new(db);

    assert!(service.pending_requests("B", 1, "101").await?.is_empty());

    let result = service.pending_requests("B", 1, "999").await;
    assert!(matches!(
        result,
        Err(AppError::SocietyErr(SocietyError::FlatNotFound))
    ));

    Ok(())
}
