use super::*;

/// Tests deleting a society together with its tree.
///
/// Expected: true once, then false; the flat is no longer reachable
#[tokio::test]
async fn deletes_society_and_tree() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let flat_id = uuid::Uuid::new_v4();
    let society = factory::society::SocietyFactory::new(db, owner.id)
        .wings(single_flat_wings("A", flat_id, "101"))
        .build()
        .await?;

    let repo = SocietyRepository::new(db);
    assert!(repo.delete(society.id).await?);
    assert!(!repo.delete(society.id).await?);
    assert!(repo.find_by_id(society.id).await?.is_none());
    assert!(repo.find_first_with_flat(flat_id).await.is_err());

    Ok(())
}
