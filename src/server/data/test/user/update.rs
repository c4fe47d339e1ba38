use super::*;

/// Tests a partial profile update.
///
/// Expected: set fields change, unset fields keep their stored values
#[tokio::test]
async fn updates_only_set_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(create_param("9000000030", Some("old@example.com")))
        .await?;

    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                first_name: Some("Nisha".to_string()),
                has_pet: Some(true),
                interests: Some(vec!["cycling".to_string()]),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Nisha");
    assert_eq!(updated.last_name, "Rao");
    assert!(updated.has_pet);
    assert_eq!(updated.email.as_deref(), Some("old@example.com"));
    assert_eq!(updated.interests, vec!["cycling"]);

    Ok(())
}

/// Tests an update that changes nothing.
///
/// Expected: Ok(Some) with the stored user unchanged
#[tokio::test]
async fn empty_update_returns_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("9000000031", None)).await?;

    let updated = repo.update(user.id, UpdateUserParam::default()).await?;

    assert_eq!(updated, Some(user));

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            404,
            UpdateUserParam {
                first_name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: true for an existing user, false otherwise
#[tokio::test]
async fn updates_password_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("9000000032", None)).await?;

    assert!(repo.update_password(user.id, "new-hash".to_string()).await?);
    assert!(!repo.update_password(404, "new-hash".to_string()).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}
