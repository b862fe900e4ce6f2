// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! User roles for authorization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User roles for authorization.
///
/// ## Roles
///
/// - `Citizen` - Files complaints and submits feedback on their resolution
/// - `Officer` - Reviews every complaint and progresses its status
/// - `Admin` - Everything an officer can do, plus department and user management
/// - `Politician` - Registered constituency account; no extra privileges today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Normal citizen user (owns complaints)
    Citizen,
    /// Municipal officer (works the complaint queue)
    Officer,
    /// Full administrative access
    Admin,
    /// Constituency representative
    Politician,
}

impl Role {
    /// Parse a role from its wire form (case-insensitive).
    ///
    /// Returns `None` for anything outside the closed set; callers decide
    /// the fallback (registration defaults to `Citizen`).
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "citizen" => Some(Role::Citizen),
            "officer" => Some(Role::Officer),
            "admin" => Some(Role::Admin),
            "politician" => Some(Role::Politician),
            _ => None,
        }
    }
}

impl Default for Role {
    /// Default role is Citizen (least privilege for registered users).
    fn default() -> Self {
        Role::Citizen
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Citizen => write!(f, "citizen"),
            Role::Officer => write!(f, "officer"),
            Role::Admin => write!(f, "admin"),
            Role::Politician => write!(f, "politician"),
        }
    }
}
