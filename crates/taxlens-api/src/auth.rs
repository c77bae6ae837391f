//! Token issuance and verification.
//!
//! Identity is an opaque string. It is signed into an HS256 token at login
//! and threaded back into handlers through the [`AuthUser`] extractor as an
//! explicit parameter, never through ambient request state.

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Signs a token for `identity`, valid for `ttl_hours`.
pub fn issue_token(identity: &str, secret: &str, ttl_hours: i64) -> Result<String, ApiError> {
    let exp = (Utc::now() + Duration::hours(ttl_hours)).timestamp() as usize;
    let claims = Claims { sub: identity.to_string(), exp };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| ApiError::Internal(format!("could not sign token: {e}")))
}

/// Verifies a token and returns the identity it carries.
pub fn verify_token(token: &str, secret: &str) -> Result<String, ApiError> {
    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map(|data| data.claims.sub)
        .map_err(|_| ApiError::Unauthorized("invalid token".to_string()))
}

/// Verified caller identity, extracted from the `Authorization` header.
/// Routes without this extractor stay public.
pub struct AuthUser(pub String);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing token".to_string()))?;

        let token = header.strip_prefix("Bearer ").unwrap_or(header);
        let identity = verify_token(token, &state.config.jwt_secret)?;
        Ok(AuthUser(identity))
    }
}
