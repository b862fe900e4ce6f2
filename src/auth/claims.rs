// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Session token claims.

use serde::{Deserialize, Serialize};

use super::roles::Role;

/// Claims carried by a session token.
///
/// The token is stateless: validity is determined purely by signature and
/// expiry, never by a server-side revocation list. The subject is the user
/// id; the role is embedded so the payload mirrors what was issued, but the
/// authenticated identity (including the role) is always re-resolved from
/// the store on each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user id
    pub sub: String,

    /// Role at time of issuance
    pub role: Role,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_round_trip_as_json() {
        let claims = Claims {
            sub: "user-1".to_string(),
            role: Role::Officer,
            iat: 1_700_000_000,
            exp: 1_700_172_800,
        };

        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, "user-1");
        assert_eq!(back.role, Role::Officer);
        assert_eq!(back.exp, claims.exp);
    }
}
