// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Session token minting and verification.
//!
//! Tokens are HS256 JWTs signed with the process-wide secret from
//! [`crate::config::AppConfig`]. Both registration and login mint a token
//! valid for exactly two days from issuance.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::Claims;
use super::error::AuthError;
use super::roles::Role;

/// Token lifetime in seconds (2 days).
pub const TOKEN_TTL_SECS: i64 = 2 * 24 * 60 * 60;

/// Keys for signing and verifying session tokens.
///
/// Built once at startup from the configured secret and shared through
/// application state; business logic never touches the environment.
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Mint a session token for the given user.
    pub fn mint(&self, user_id: &str, role: Role) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// Every failure mode collapses to [`AuthError::InvalidToken`]; clients
    /// cannot distinguish a bad signature from an expired token.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> AuthKeys {
        AuthKeys::from_secret(b"unit-test-secret")
    }

    #[test]
    fn mint_then_verify_round_trips() {
        let keys = keys();
        let token = keys.mint("user-7", Role::Citizen).unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-7");
        assert_eq!(claims.role, Role::Citizen);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn token_signed_with_different_secret_fails() {
        let token = AuthKeys::from_secret(b"some-other-secret")
            .mint("user-7", Role::Admin)
            .unwrap();

        assert_eq!(keys().verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_fails() {
        let keys = keys();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-7".to_string(),
            role: Role::Citizen,
            iat: now - TOKEN_TTL_SECS - 3600,
            // Past the default clock-skew leeway
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"unit-test-secret"),
        )
        .unwrap();

        assert_eq!(keys.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn garbage_token_fails() {
        assert_eq!(
            keys().verify("not.a.token"),
            Err(AuthError::InvalidToken)
        );
    }
}
