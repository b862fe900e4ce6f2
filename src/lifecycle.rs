// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Complaint lifecycle rules and per-request capabilities.
//!
//! The status machine is `Pending → Processing → {Resolved, Solved}`, with
//! `Resolved` and `Solved` terminal for feedback eligibility. The product
//! rule for transitions is deliberately loose: roles that may update a
//! complaint may move it between any two statuses, including skipping
//! states and regressing. That rule is encoded explicitly here so a
//! stricter monotonic policy would be a one-function change.

use crate::auth::Role;
use crate::models::ComplaintStatus;

/// Effective permissions of a caller over a specific complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Caller is the complaint's author.
    pub is_owner: bool,
    /// Caller holds a role that works the complaint queue.
    pub is_privileged: bool,
}

/// Roles that may progress any complaint's status.
pub fn is_privileged(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Officer)
}

/// Compute the caller's capability over a complaint given its owner.
pub fn capability(caller_id: &str, caller_role: Role, owner_id: &str) -> Capability {
    Capability {
        is_owner: caller_id == owner_id,
        is_privileged: is_privileged(caller_role),
    }
}

/// Whether `actor` may move a complaint from `from` to `to`.
///
/// Privileged roles: any status to any status. Everyone else: no status
/// change at all (leaving the status untouched is always fine).
pub fn status_change_allowed(from: ComplaintStatus, to: ComplaintStatus, actor: Role) -> bool {
    if from == to {
        return true;
    }
    is_privileged(actor)
}

/// Feedback is only accepted once a complaint has reached a terminal state.
pub fn can_submit_feedback(status: ComplaintStatus) -> bool {
    matches!(status, ComplaintStatus::Resolved | ComplaintStatus::Solved)
}
