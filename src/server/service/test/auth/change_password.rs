use super::*;

/// Tests changing a password with the correct current password.
///
/// Expected: Ok; only the new password logs in afterwards
#[tokio::test]
async fn changes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let user = service.register(register_param("9100000021", None)).await?;

    service
        .change_password(user.id, "open-sesame".to_string(), "new-secret".to_string())
        .await?;

    assert!(service
        .login("9100000021", "new-secret".to_string())
        .await
        .is_ok());
    assert!(service
        .login("9100000021", "open-sesame".to_string())
        .await
        .is_err());

    Ok(())
}

/// Tests changing a password with the wrong current password.
///
/// Expected: Err(WrongPassword("Current password is incorrect"))
#[tokio::test]
async fn rejects_incorrect_current_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let user = service.register(register_param("9100000022", None)).await?;

    let result = service
        .change_password(user.id, "wrong".to_string(), "new-secret".to_string())
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::WrongPassword(msg))) => {
            assert_eq!(msg, "Current password is incorrect")
        }
        other => panic!("unexpected result: {:?}", other),
    }

    Ok(())
}

/// Tests changing the password of a missing user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let result = service
        .change_password(404, "a".to_string(), "b".to_string())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
