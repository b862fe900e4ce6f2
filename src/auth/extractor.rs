// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is the caller's PublicUser, password hash excluded
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::error::AuthError;
use crate::models::PublicUser;
use crate::state::AppState;

/// Extractor for authenticated users.
///
/// Validates the `Authorization: Bearer <token>` header, verifies the
/// token's signature and expiry, and resolves the subject against the user
/// store. Runs before any route-specific logic by construction: handlers
/// that take `Auth` cannot execute without it succeeding.
pub struct Auth(pub PublicUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?
            .trim();

        let claims = state.auth.verify(token)?;

        // The token is stateless; re-resolve the identity so a deleted
        // account cannot keep acting until its token expires.
        let store = state.store.read().await;
        let user = store
            .user_by_id(&claims.sub)
            .map(PublicUser::from)
            .ok_or(AuthError::UnknownIdentity)?;

        Ok(Auth(user))
    }
}
