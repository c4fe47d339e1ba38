use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::auth::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("middleware-test-secret", Duration::days(7))
}

/// Headers carrying a freshly issued token for `user`.
fn bearer_headers(tokens: &TokenService, user: entity::user::Model) -> HeaderMap {
    let user = User::from_entity(user).unwrap();
    let token = tokens.issue(&user).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
