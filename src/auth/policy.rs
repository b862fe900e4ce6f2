// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Role-based access policy.
//!
//! One declarative table maps (resource, action) to the set of roles allowed
//! to perform it. Handlers consult [`authorize`] instead of repeating inline
//! role comparisons per route.

use super::error::AuthError;
use super::roles::Role;
use crate::models::PublicUser;

/// Resources the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Users,
    Complaints,
    Departments,
    Feedbacks,
}

/// Actions a caller may attempt against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Read,
    List,
    Update,
    Delete,
}

/// Any authenticated role.
const ANY_ROLE: &[Role] = &[Role::Citizen, Role::Officer, Role::Admin, Role::Politician];
/// Roles allowed to work the complaint queue.
const PRIVILEGED: &[Role] = &[Role::Admin, Role::Officer];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// The permitted role set for an operation.
///
/// Operations absent from the explicit arms admit any authenticated role;
/// routes that need no authentication at all (department reads, register,
/// login) never consult this table.
pub fn permitted_roles(resource: Resource, action: Action) -> &'static [Role] {
    match (resource, action) {
        (Resource::Users, Action::List) => ADMIN_ONLY,
        (Resource::Complaints, Action::List) => PRIVILEGED,
        (Resource::Complaints, Action::Update) => PRIVILEGED,
        (Resource::Departments, Action::Create | Action::Update | Action::Delete) => ADMIN_ONLY,
        _ => ANY_ROLE,
    }
}

/// Admit or deny an operation for the given identity.
///
/// Pure function: no side effects, no I/O. `None` signals a wiring bug
/// (role check reached without authentication) and is always denied.
pub fn authorize(
    identity: Option<&PublicUser>,
    resource: Resource,
    action: Action,
) -> Result<(), AuthError> {
    let user = identity.ok_or(AuthError::Unauthenticated)?;

    if permitted_roles(resource, action).contains(&user.role) {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_role(role: Role) -> PublicUser {
        PublicUser {
            id: "user-1".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            phone: "5550001234".to_string(),
            address: "1 Test Lane".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn user_listing_is_admin_only() {
        assert_eq!(permitted_roles(Resource::Users, Action::List), ADMIN_ONLY);

        let admin = user_with_role(Role::Admin);
        assert!(authorize(Some(&admin), Resource::Users, Action::List).is_ok());

        for role in [Role::Citizen, Role::Officer, Role::Politician] {
            let user = user_with_role(role);
            assert_eq!(
                authorize(Some(&user), Resource::Users, Action::List),
                Err(AuthError::Forbidden)
            );
        }
    }

    #[test]
    fn complaint_queue_is_for_admin_and_officer() {
        for action in [Action::List, Action::Update] {
            for role in [Role::Admin, Role::Officer] {
                let user = user_with_role(role);
                assert!(authorize(Some(&user), Resource::Complaints, action).is_ok());
            }
            for role in [Role::Citizen, Role::Politician] {
                let user = user_with_role(role);
                assert_eq!(
                    authorize(Some(&user), Resource::Complaints, action),
                    Err(AuthError::Forbidden)
                );
            }
        }
    }

    #[test]
    fn department_mutation_is_admin_only() {
        for action in [Action::Create, Action::Update, Action::Delete] {
            let officer = user_with_role(Role::Officer);
            assert_eq!(
                authorize(Some(&officer), Resource::Departments, action),
                Err(AuthError::Forbidden)
            );

            let admin = user_with_role(Role::Admin);
            assert!(authorize(Some(&admin), Resource::Departments, action).is_ok());
        }
    }

    #[test]
    fn unlisted_operations_admit_any_role() {
        for role in [Role::Citizen, Role::Officer, Role::Admin, Role::Politician] {
            let user = user_with_role(role);
            assert!(authorize(Some(&user), Resource::Complaints, Action::Create).is_ok());
            assert!(authorize(Some(&user), Resource::Feedbacks, Action::Create).is_ok());
        }
    }

    #[test]
    fn missing_identity_is_unauthenticated() {
        assert_eq!(
            authorize(None, Resource::Complaints, Action::Create),
            Err(AuthError::Unauthenticated)
        );
    }
}
