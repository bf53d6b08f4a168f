/// Bearer-token gate for privileged operations
use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};

use crate::error::AuthError;
use crate::security::Claims;
use crate::AppState;

/// Claims extracted from a verified `Authorization: Bearer` header.
///
/// Verification is purely against the token signature and expiry; the
/// account's current status is not re-checked against the store, so a
/// session issued before a block stays valid until it expires.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

#[async_trait]
impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::InvalidToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        let claims = state.tokens.verify(token)?;
        Ok(AuthClaims(claims))
    }
}
