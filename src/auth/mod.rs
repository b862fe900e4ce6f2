// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! # Authentication Module
//!
//! Credential verification and role-based access control for the portal API.
//!
//! ## Auth Flow
//!
//! 1. Client registers or logs in with email/password
//! 2. Server verifies the Argon2id hash and mints an HS256 session token
//!    (`{sub, role, iat, exp}`, 2-day expiry)
//! 3. Client sends `Authorization: Bearer <token>` on every request
//! 4. The [`Auth`] extractor verifies signature and expiry, then resolves
//!    the subject against the user store
//! 5. Role-gated routes consult the declarative table in [`policy`]
//!
//! ## Security
//!
//! - Tokens are stateless; there is no revocation list
//! - Login failures never reveal whether the email exists
//! - Password hashes never leave the store

pub mod claims;
pub mod error;
pub mod extractor;
pub mod password;
pub mod policy;
pub mod roles;
pub mod token;

pub use error::AuthError;
pub use extractor::Auth;
pub use roles::Role;
pub use token::AuthKeys;
