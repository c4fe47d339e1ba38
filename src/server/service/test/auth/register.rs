use super::*;

/// Tests registering a new user.
///
/// Expected: Ok with a stored Argon2 hash instead of the plaintext password
#[tokio::test]
async fn registers_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let service = AuthService::new(db, &tokens);
    let user = service
        .register(register_param("9100000001", Some("kiran@example.com")))
        .await?;

    assert_eq!(user.phone, "9100000001");
    assert_ne!(user.password_hash, "open-sesame");
    assert!(user.password_hash.starts_with("$argon2id$"));

    Ok(())
}

/// Tests that a taken email is reported by name.
///
/// Expected: Err(BadRequest("Email is already registered"))
#[tokio::test]
async fn rejects_registered_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);
    let result = service
        .register(register_param("9100000002", Some("taken@example.com")))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Email is already registered"),
        other => panic!("unexpected result: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that a taken phone number is reported by name.
///
/// Expected: Err(BadRequest("Phone number is already registered"))
#[tokio::test]
async fn rejects_registered_phone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::user::UserFactory::new(db)
        .phone("9100000003")
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);
    let result = service.register(register_param("9100000003", None)).await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Phone number is already registered"),
        other => panic!("unexpected result: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
