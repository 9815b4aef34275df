//! Session authentication middleware.
//!
//! Validates the `Authorization: Bearer <jwt>` header against the auth
//! provider's HS256 secret and attaches a [`SessionContext`] to the request.
//! Session issuance and refresh belong to the auth provider; this service
//! only verifies.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use mobilia_core::AppError;
use std::sync::Arc;

use crate::auth::session::{SessionClaims, SessionContext};
use crate::error::HttpAppError;

#[derive(Clone)]
pub struct AuthState {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthState {
    pub fn new(session_jwt_secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(session_jwt_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

pub async fn session_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized("Unauthorized".to_string()))
                .into_response();
        }
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        return HttpAppError(AppError::Unauthorized("Unauthorized".to_string())).into_response();
    };

    let claims =
        match decode::<SessionClaims>(token, &auth_state.decoding_key, &auth_state.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected invalid session token");
                return HttpAppError(AppError::Unauthorized("Unauthorized".to_string()))
                    .into_response();
            }
        };

    request.extensions_mut().insert(SessionContext {
        user_id: claims.sub,
    });

    next.run(request).await
}
