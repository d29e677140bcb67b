// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Session token issue and verification.
//!
//! Tokens are HS256 JWTs carrying the owning user's identity in `sub` and
//! an absolute expiry in `exp`, set 24 hours after issue. Validity is
//! time-only: there is no revocation list and no refresh.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use crate::config::ACCESS_TOKEN_EXPIRE_HOURS;
use crate::models::UserId;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject (user ID)
    sub: String,
    /// Expiration timestamp
    exp: i64,
}

/// Issue a session token for a user, expiring 24 hours from now.
pub fn issue(user_id: &UserId, secret: &str) -> Result<String, AuthError> {
    let exp = Utc::now() + Duration::hours(ACCESS_TOKEN_EXPIRE_HOURS);
    encode_with_expiry(user_id, exp.timestamp(), secret)
}

fn encode_with_expiry(user_id: &UserId, exp: i64, secret: &str) -> Result<String, AuthError> {
    let claims = Claims {
        sub: user_id.0.clone(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::InternalError(format!("token encoding failed: {e}")))
}

/// Verify a session token and return the subject identity.
///
/// Bad signature, malformed payload, missing subject, and expiry all map
/// to the same [`AuthError::InvalidToken`].
pub fn verify(token: &str, secret: &str) -> Result<UserId, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = CLOCK_SKEW_LEEWAY;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidToken)?;

    if data.claims.sub.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    Ok(UserId(data.claims.sub))
}
