//! Session token minting for tests.

use jsonwebtoken::{encode, EncodingKey, Header};
use mobilia_api::auth::SessionClaims;
use uuid::Uuid;

/// HS256 secret shared with the test AuthState.
pub const TEST_SESSION_SECRET: &str = "test-session-secret-at-least-32-characters-long";

/// Mint a valid session token for the given user.
pub fn session_token(user_id: Uuid) -> String {
    token_with_exp(user_id, chrono::Utc::now().timestamp() + 3600)
}

/// Mint a token that expired an hour ago (beyond validation leeway).
pub fn expired_session_token(user_id: Uuid) -> String {
    token_with_exp(user_id, chrono::Utc::now().timestamp() - 3600)
}

fn token_with_exp(user_id: Uuid, exp: i64) -> String {
    let claims = SessionClaims {
        sub: user_id,
        exp: exp as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SESSION_SECRET.as_bytes()),
    )
    .expect("Failed to encode test token")
}

/// `Authorization` header value for the given user.
pub fn bearer(user_id: Uuid) -> String {
    format!("Bearer {}", session_token(user_id))
}
