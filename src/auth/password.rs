// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Password hashing.
//!
//! Argon2id with the crate defaults, stored as PHC strings. Plaintext
//! passwords never reach the store. Hashing is CPU-heavy by design, so
//! handlers run these functions under `spawn_blocking`.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password into a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verify a candidate password against a stored PHC hash.
///
/// An unparseable stored hash verifies as false rather than erroring; login
/// must not reveal anything about the stored credential.
pub fn verify_password(candidate: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok()
}
