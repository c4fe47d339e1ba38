use super::*;

/// Tests authenticating with a valid token and no permissions.
///
/// Expected: Ok(User) for the token subject
#[tokio::test]
async fn authenticates_token_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer_headers(&tokens, user);

    let caller = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(caller.id, user_id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_foreign_signature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let foreign = TokenService::new("another-secret", Duration::days(7));
    let headers = bearer_headers(&foreign, user);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user has since been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let user = factory::create_user(db).await?;
    let user_id = user.id;
    let headers = bearer_headers(&tokens, user);
    crate::server::data::user::UserRepository::new(db)
        .delete(user_id)
        .await?;

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user_id
    ));

    Ok(())
}

/// Tests acting on one's own account, another account, and as admin.
///
/// Expected: Ok for self, Forbidden for another resident, Ok for an admin
#[tokio::test]
async fn self_or_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let resident = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let resident_id = resident.id;
    let resident_headers = bearer_headers(&tokens, resident);
    let admin_headers = bearer_headers(&tokens, admin);

    let guard = AuthGuard::new(db, &tokens, &resident_headers);
    assert!(guard
        .require(&[Permission::SelfOrAdmin(resident_id)])
        .await
        .is_ok());
    assert!(matches!(
        guard.require(&[Permission::SelfOrAdmin(other.id)]).await,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));

    let guard = AuthGuard::new(db, &tokens, &admin_headers);
    assert!(guard
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await
        .is_ok());

    Ok(())
}
