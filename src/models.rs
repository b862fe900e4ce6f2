// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! # API Data Models
//!
//! Domain entities plus the request and response structures used by the
//! REST API. All wire types derive `Serialize`, `Deserialize`, and
//! `ToSchema` for automatic JSON handling and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Users**: Registered accounts with a role
//! - **Departments**: Municipal departments complaints can target
//! - **Complaints**: Citizen-filed grievances with a lifecycle status
//! - **Feedback**: Post-resolution ratings on complaints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::Role;

/// Maximum length of a complaint description.
pub const DESCRIPTION_MAX: usize = 1000;
/// Maximum length of a complaint location.
pub const LOCATION_MAX: usize = 255;
/// Maximum length of a feedback comment.
pub const COMMENT_MAX: usize = 500;

/// A contact phone number is exactly ten ASCII digits.
pub fn valid_phone(s: &str) -> bool {
    s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())
}

// =============================================================================
// Users
// =============================================================================

/// A registered account, as held in the store.
///
/// Carries the password hash and therefore never crosses the wire;
/// responses use [`PublicUser`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stored lowercase; uniqueness is case-insensitive.
    pub email: String,
    /// Argon2id PHC string. Never the plaintext.
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    /// Immutable after registration; no promotion workflow exists.
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Wire view of a user with the password hash excluded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Abbreviated user embedded in populated complaint and feedback listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Registration request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    /// Optional requested role; anything outside the closed set falls back
    /// to citizen.
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful register/login response: identity plus a fresh session token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

// =============================================================================
// Departments
// =============================================================================

/// A municipal department complaints can be filed against.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    /// Unique across departments.
    pub dept_name: String,
    pub dept_head: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Abbreviated department embedded in populated complaint listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSummary {
    pub id: String,
    pub dept_name: String,
    pub dept_head: String,
}

impl From<&Department> for DepartmentSummary {
    fn from(dept: &Department) -> Self {
        DepartmentSummary {
            id: dept.id.clone(),
            dept_name: dept.dept_name.clone(),
            dept_head: dept.dept_head.clone(),
        }
    }
}

/// Request to create a department (admin only).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentRequest {
    pub dept_name: String,
    pub dept_head: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update to a department (admin only).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentRequest {
    #[serde(default)]
    pub dept_name: Option<String>,
    #[serde(default)]
    pub dept_head: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response wrapping a department mutation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentResponse {
    pub message: String,
    pub department: Department,
}

// =============================================================================
// Complaints
// =============================================================================

/// Closed set of complaint categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum ComplaintCategory {
    #[serde(rename = "Sanitation & Cleanliness")]
    SanitationCleanliness,
    #[serde(rename = "Water Supply")]
    WaterSupply,
    #[serde(rename = "Electricity Issues")]
    ElectricityIssues,
    #[serde(rename = "Roads & Infrastructure")]
    RoadsInfrastructure,
    #[serde(rename = "Public Safety & Security")]
    PublicSafetySecurity,
    #[serde(rename = "Environmental Issues")]
    EnvironmentalIssues,
    #[serde(rename = "Government Service Issues")]
    GovernmentServiceIssues,
    #[serde(rename = "Health & Hygiene")]
    HealthHygiene,
    #[serde(rename = "Transport & Traffic")]
    TransportTraffic,
    #[default]
    Other,
}

/// Complaint lifecycle status.
///
/// `Pending` is the initial state; `Resolved` and `Solved` are the terminal
/// states for feedback eligibility. Transition rules live in
/// [`crate::lifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Processing,
    Resolved,
    Solved,
}

/// A citizen-filed complaint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    /// Owning user id. Immutable after creation.
    pub user: String,
    /// Optional target department id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub complaint_type: ComplaintCategory,
    pub description: String,
    pub location: String,
    pub status: ComplaintStatus,
    pub submission_date: DateTime<Utc>,
}

/// Complaint with its user and department references populated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    pub id: String,
    /// Populated author; omitted on listings scoped to the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentSummary>,
    pub complaint_type: ComplaintCategory,
    pub description: String,
    pub location: String,
    pub status: ComplaintStatus,
    pub submission_date: DateTime<Utc>,
}

/// Request to file a complaint.
///
/// Note the absence of a status field: complaints always start `Pending`,
/// and any status the client smuggles into the body is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    #[serde(default)]
    pub complaint_type: Option<ComplaintCategory>,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Partial update to a complaint (admin/officer only), including status.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaintRequest {
    #[serde(default)]
    pub complaint_type: Option<ComplaintCategory>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub status: Option<ComplaintStatus>,
}

/// Response wrapping a complaint mutation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplaintResponse {
    pub message: String,
    pub complaint: Complaint,
}

// =============================================================================
// Feedback
// =============================================================================

/// Post-resolution feedback on a complaint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub complaint: String,
    pub user: String,
    /// 1-5 inclusive.
    pub rating: u8,
    pub comment: String,
    pub feedback_date: DateTime<Utc>,
}

/// Feedback with its author populated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackView {
    pub id: String,
    pub complaint: String,
    /// Populated author; `None` if the account has since been removed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    pub rating: u8,
    pub comment: String,
    pub feedback_date: DateTime<Utc>,
}

/// Request to submit feedback on a resolved complaint.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFeedbackRequest {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Response wrapping a feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub message: String,
    pub feedback: Feedback,
}

/// Bare `{"message": ...}` acknowledgement for deletions.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_excludes_password_hash() {
        let user = User {
            id: "u1".into(),
            name: "A".into(),
            email: "a@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            phone: "1234567890".into(),
            address: "somewhere".into(),
            role: Role::Citizen,
            created_at: Utc::now(),
        };

        let public = PublicUser::from(&user);
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn category_defaults_to_other() {
        assert_eq!(ComplaintCategory::default(), ComplaintCategory::Other);
    }

    #[test]
    fn category_wire_names_match_the_closed_set() {
        let json = serde_json::to_string(&ComplaintCategory::SanitationCleanliness).unwrap();
        assert_eq!(json, r#""Sanitation & Cleanliness""#);

        let parsed: ComplaintCategory = serde_json::from_str(r#""Water Supply""#).unwrap();
        assert_eq!(parsed, ComplaintCategory::WaterSupply);

        assert!(serde_json::from_str::<ComplaintCategory>(r#""Potholes""#).is_err());
    }

    #[test]
    fn status_wire_names_are_capitalised() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::Processing).unwrap(),
            r#""Processing""#
        );
        let parsed: ComplaintStatus = serde_json::from_str(r#""Solved""#).unwrap();
        assert_eq!(parsed, ComplaintStatus::Solved);
    }

    #[test]
    fn create_complaint_request_ignores_client_status() {
        // Unknown fields (including "status") are dropped by serde.
        let req: CreateComplaintRequest = serde_json::from_str(
            r#"{"complaintType":"Water Supply","description":"no water","location":"ward 4","status":"Solved"}"#,
        )
        .unwrap();
        assert_eq!(req.complaint_type, Some(ComplaintCategory::WaterSupply));
        assert_eq!(req.description, "no water");
    }

    #[test]
    fn phone_validation() {
        assert!(valid_phone("0123456789"));
        assert!(!valid_phone("123456789"));
        assert!(!valid_phone("12345678901"));
        assert!(!valid_phone("12345678ab"));
    }
}
