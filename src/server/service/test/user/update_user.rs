use super::*;

/// Tests moving a user onto an email another user holds.
///
/// Expected: Err(BadRequest("Email is already in use"))
#[tokio::test]
async fn rejects_email_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("holder@example.com")
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update_user(
            user.id,
            UpdateUserParam {
                email: Some("holder@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Email is already in use"),
        other => panic!("unexpected result: {:?}", other.map(|u| u.map(|u| u.id))),
    }

    Ok(())
}

/// Tests re-submitting the user's own phone number.
///
/// Expected: Ok(Some) since the number belongs to the same user
#[tokio::test]
async fn accepts_own_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update_user(
            user.id,
            UpdateUserParam {
                phone: Some(user.phone.clone()),
                occupation: Some("Architect".to_string()),
                ..Default::default()
            },
        )
        .await?
        .expect("user exists");

    assert_eq!(updated.phone, user.phone);
    assert_eq!(updated.occupation.as_deref(), Some("Architect"));

    Ok(())
}

/// Tests listing users through the service with an empty filter.
///
/// Expected: Ok with every user
#[tokio::test]
async fn lists_all_users_without_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::user::create_admin(db).await?;

    let users = UserService::new(db)
        .get_all_users(&UserFilter::default())
        .await?;

    assert_eq!(users.len(), 2);

    Ok(())
}
