// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Authentication and authorization errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while authenticating a request or checking permissions.
///
/// The client-visible messages are deliberately terse one-liners; detailed
/// context stays in the server logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization header absent or not `Bearer <token>`
    #[error("Access denied. No token provided.")]
    MissingToken,
    /// Signature did not verify, token malformed, or token expired
    #[error("Invalid or expired token")]
    InvalidToken,
    /// Token decoded but the referenced user no longer exists
    #[error("User not found")]
    UnknownIdentity,
    /// Role check reached without an authenticated identity
    #[error("Authentication required")]
    Unauthenticated,
    /// Valid identity, insufficient role
    #[error("You do not have permission to access this route")]
    Forbidden,
}

#[derive(Serialize)]
struct AuthErrorBody {
    message: String,
}

impl AuthError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::UnknownIdentity
            | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(AuthErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
