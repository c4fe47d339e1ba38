use super::*;

/// Tests logging in by email and by phone.
///
/// Expected: Ok with a token whose subject is the user
#[tokio::test]
async fn logs_in_with_email_or_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let user = service
        .register(register_param("9100000011", Some("login@example.com")))
        .await?;

    for identifier in ["login@example.com", "9100000011"] {
        let (token, logged_in) = service
            .login(identifier, "open-sesame".to_string())
            .await?;

        assert_eq!(logged_in.id, user.id);
        let claims = tokens.verify(&token)?;
        assert_eq!(claims.user_id()?, user.id);
        assert_eq!(claims.role, Role::Resident);
    }

    Ok(())
}

/// Tests logging in with an unknown identifier.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_identifier_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let result = service.login("ghost@example.com", "x".to_string()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(WrongPassword)
#[tokio::test]
async fn wrong_password_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    service.register(register_param("9100000012", None)).await?;

    let result = service.login("9100000012", "guess".to_string()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::WrongPassword(_)))
    ));

    Ok(())
}
