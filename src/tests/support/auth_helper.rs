use actix_web::web;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{TokenClaims, TokenProvider};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        leeway_seconds: 0,
    })
}

/// Token provider as routes expect it in app data.
pub fn token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service());
    web::Data::new(provider)
}

fn sign(user_id: i32, token_type: &str, valid_for: Duration) -> String {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id,
        exp: (now + valid_for).timestamp(),
        iat: now.timestamp(),
        nbf: now.timestamp(),
        token_type: token_type.to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn access_token(user_id: i32) -> String {
    sign(user_id, "access", Duration::hours(1))
}

pub fn expired_access_token(user_id: i32) -> String {
    sign(user_id, "access", Duration::hours(-1))
}
