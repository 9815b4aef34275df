use axum::{extract::FromRequestParts, http::request::Parts};
use mobilia_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HttpAppError;

/// Claims carried by a session token from the CRM's auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Authenticated user id.
    pub sub: Uuid,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

/// Authenticated session, inserted into request extensions by
/// [`super::middleware::session_middleware`] after token validation.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .ok_or_else(|| HttpAppError(AppError::Unauthorized("Unauthorized".to_string())))
    }
}
