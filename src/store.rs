// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! In-memory document store.
//!
//! Keyed maps per collection with create/find/update/delete by id and by
//! filter, plus referential population of related entities for the
//! complaint and feedback views. Uniqueness invariants (user email,
//! department name) are enforced at creation under the caller's write
//! lock, so check-then-insert is atomic per operation.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::Role;
use crate::error::ApiError;
use crate::models::{
    Complaint, ComplaintStatus, ComplaintView, CreateComplaintRequest, CreateDepartmentRequest,
    Department, DepartmentSummary, Feedback, FeedbackView, PublicUser, UpdateComplaintRequest,
    UpdateDepartmentRequest, User, UserSummary,
};

/// Input for user creation; the handler has already hashed the password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
}

#[derive(Default)]
pub struct Store {
    users: HashMap<String, User>,
    departments: HashMap<String, Department>,
    complaints: HashMap<String, Complaint>,
    feedbacks: HashMap<String, Feedback>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Create a user. Emails are unique case-insensitively and stored
    /// lowercase.
    pub fn create_user(&mut self, new_user: NewUser) -> Result<User, ApiError> {
        let email = new_user.email.to_lowercase();
        if self.users.values().any(|u| u.email == email) {
            return Err(ApiError::validation("Email already registered"));
        }

        let id = Uuid::new_v4().to_string();
        let user = User {
            id: id.clone(),
            name: new_user.name,
            email,
            password_hash: new_user.password_hash,
            phone: new_user.phone,
            address: new_user.address,
            role: new_user.role,
            created_at: Utc::now(),
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let email = email.to_lowercase();
        self.users.values().find(|u| u.email == email)
    }

    /// Every registered user, password hashes excluded.
    pub fn list_users(&self) -> Vec<PublicUser> {
        let mut users: Vec<PublicUser> = self.users.values().map(PublicUser::from).collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        users
    }

    #[cfg(test)]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // =========================================================================
    // Departments
    // =========================================================================

    /// Create a department. Names are unique.
    pub fn create_department(
        &mut self,
        request: CreateDepartmentRequest,
    ) -> Result<Department, ApiError> {
        if self
            .departments
            .values()
            .any(|d| d.dept_name == request.dept_name)
        {
            return Err(ApiError::validation("Department already exists"));
        }

        let id = Uuid::new_v4().to_string();
        let department = Department {
            id: id.clone(),
            dept_name: request.dept_name,
            dept_head: request.dept_head,
            email: request.email,
            phone: request.phone,
            description: request.description,
            created_at: Utc::now(),
        };
        self.departments.insert(id, department.clone());
        Ok(department)
    }

    pub fn department_by_id(&self, id: &str) -> Option<&Department> {
        self.departments.get(id)
    }

    pub fn list_departments(&self) -> Vec<Department> {
        let mut departments: Vec<Department> = self.departments.values().cloned().collect();
        departments.sort_by(|a, b| a.dept_name.cmp(&b.dept_name));
        departments
    }

    pub fn update_department(
        &mut self,
        id: &str,
        changes: UpdateDepartmentRequest,
    ) -> Result<Department, ApiError> {
        let Some(department) = self.departments.get_mut(id) else {
            return Err(ApiError::not_found("Department not found"));
        };

        if let Some(dept_name) = changes.dept_name {
            department.dept_name = dept_name;
        }
        if let Some(dept_head) = changes.dept_head {
            department.dept_head = dept_head;
        }
        if let Some(email) = changes.email {
            department.email = email;
        }
        if let Some(phone) = changes.phone {
            department.phone = phone;
        }
        if let Some(description) = changes.description {
            department.description = Some(description);
        }

        Ok(department.clone())
    }

    pub fn delete_department(&mut self, id: &str) -> Result<(), ApiError> {
        if self.departments.remove(id).is_some() {
            Ok(())
        } else {
            Err(ApiError::not_found("Department not found"))
        }
    }

    // =========================================================================
    // Complaints
    // =========================================================================

    /// File a complaint for `owner_id`. Always starts `Pending`; the
    /// request type has no status field, so client-supplied status never
    /// reaches this point.
    pub fn create_complaint(&mut self, owner_id: &str, request: CreateComplaintRequest) -> Complaint {
        let id = Uuid::new_v4().to_string();
        let complaint = Complaint {
            id: id.clone(),
            user: owner_id.to_string(),
            department: request.department,
            complaint_type: request.complaint_type.unwrap_or_default(),
            description: request.description,
            location: request.location,
            status: ComplaintStatus::Pending,
            submission_date: Utc::now(),
        };
        self.complaints.insert(id, complaint.clone());
        complaint
    }

    pub fn complaint_by_id(&self, id: &str) -> Option<&Complaint> {
        self.complaints.get(id)
    }

    /// All complaints with user and department populated.
    pub fn list_complaints(&self) -> Vec<ComplaintView> {
        let mut views: Vec<ComplaintView> = self
            .complaints
            .values()
            .map(|c| self.populate(c, true))
            .collect();
        Self::sort_views(&mut views);
        views
    }

    /// Complaints owned by `user_id`, department populated. The author is
    /// omitted from the view since the caller is asking about themselves.
    pub fn complaints_for_user(&self, user_id: &str) -> Vec<ComplaintView> {
        let mut views: Vec<ComplaintView> = self
            .complaints
            .values()
            .filter(|c| c.user == user_id)
            .map(|c| self.populate(c, false))
            .collect();
        Self::sort_views(&mut views);
        views
    }

    pub fn complaint_view_by_id(&self, id: &str) -> Option<ComplaintView> {
        self.complaints.get(id).map(|c| self.populate(c, true))
    }

    /// Apply a partial update. Status transition rules are the caller's
    /// responsibility (see [`crate::lifecycle`]); the store only persists.
    pub fn update_complaint(
        &mut self,
        id: &str,
        changes: UpdateComplaintRequest,
    ) -> Result<Complaint, ApiError> {
        let Some(complaint) = self.complaints.get_mut(id) else {
            return Err(ApiError::not_found("Complaint not found"));
        };

        if let Some(complaint_type) = changes.complaint_type {
            complaint.complaint_type = complaint_type;
        }
        if let Some(description) = changes.description {
            complaint.description = description;
        }
        if let Some(location) = changes.location {
            complaint.location = location;
        }
        if let Some(department) = changes.department {
            complaint.department = Some(department);
        }
        if let Some(status) = changes.status {
            complaint.status = status;
        }

        Ok(complaint.clone())
    }

    /// Remove a complaint, returning it for the handler's ownership audit.
    /// Existing feedback entries are left in place (no cascade).
    pub fn delete_complaint(&mut self, id: &str) -> Result<Complaint, ApiError> {
        self.complaints
            .remove(id)
            .ok_or_else(|| ApiError::not_found("Complaint not found"))
    }

    fn populate(&self, complaint: &Complaint, include_user: bool) -> ComplaintView {
        let user = if include_user {
            self.users.get(&complaint.user).map(UserSummary::from)
        } else {
            None
        };
        let department = complaint
            .department
            .as_ref()
            .and_then(|id| self.departments.get(id))
            .map(DepartmentSummary::from);

        ComplaintView {
            id: complaint.id.clone(),
            user,
            department,
            complaint_type: complaint.complaint_type,
            description: complaint.description.clone(),
            location: complaint.location.clone(),
            status: complaint.status,
            submission_date: complaint.submission_date,
        }
    }

    fn sort_views(views: &mut [ComplaintView]) {
        views.sort_by(|a, b| {
            a.submission_date
                .cmp(&b.submission_date)
                .then_with(|| a.id.cmp(&b.id))
        });
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    /// Record feedback. The terminal-status gate and rating range are
    /// checked by the handler before this is called. Multiple entries per
    /// (user, complaint) pair are permitted.
    pub fn create_feedback(
        &mut self,
        complaint_id: &str,
        user_id: &str,
        rating: u8,
        comment: String,
    ) -> Feedback {
        let id = Uuid::new_v4().to_string();
        let feedback = Feedback {
            id: id.clone(),
            complaint: complaint_id.to_string(),
            user: user_id.to_string(),
            rating,
            comment,
            feedback_date: Utc::now(),
        };
        self.feedbacks.insert(id, feedback.clone());
        feedback
    }

    /// Feedback entries for a complaint, authors populated.
    pub fn feedbacks_for_complaint(&self, complaint_id: &str) -> Vec<FeedbackView> {
        let mut views: Vec<FeedbackView> = self
            .feedbacks
            .values()
            .filter(|f| f.complaint == complaint_id)
            .map(|f| FeedbackView {
                id: f.id.clone(),
                complaint: f.complaint.clone(),
                user: self.users.get(&f.user).map(UserSummary::from),
                rating: f.rating,
                comment: f.comment.clone(),
                feedback_date: f.feedback_date,
            })
            .collect();
        views.sort_by(|a, b| {
            a.feedback_date
                .cmp(&b.feedback_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplaintCategory;

    fn new_user(email: &str, role: Role) -> NewUser {
        NewUser {
            name: "Test".into(),
            email: email.into(),
            password_hash: "$argon2id$x".into(),
            phone: "1234567890".into(),
            address: "addr".into(),
            role,
        }
    }

    fn complaint_request() -> CreateComplaintRequest {
        CreateComplaintRequest {
            complaint_type: Some(ComplaintCategory::WaterSupply),
            description: "No water since Monday".into(),
            location: "Ward 4".into(),
            department: None,
        }
    }

    #[test]
    fn duplicate_email_is_rejected_and_creates_nothing() {
        let mut store = Store::new();
        store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();

        let err = store
            .create_user(new_user("A@Example.COM", Role::Citizen))
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Email already registered");
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn email_lookup_is_case_insensitive() {
        let mut store = Store::new();
        let created = store.create_user(new_user("Mixed@Case.com", Role::Citizen)).unwrap();
        assert_eq!(created.email, "mixed@case.com");

        let found = store.user_by_email("MIXED@case.COM").unwrap();
        assert_eq!(found.id, created.id);
    }

    #[test]
    fn complaints_start_pending() {
        let mut store = Store::new();
        let user = store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();

        let complaint = store.create_complaint(&user.id, complaint_request());
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(complaint.user, user.id);
    }

    #[test]
    fn complaints_for_user_filters_by_owner() {
        let mut store = Store::new();
        let a = store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();
        let b = store.create_user(new_user("b@example.com", Role::Citizen)).unwrap();

        let mine = store.create_complaint(&a.id, complaint_request());
        store.create_complaint(&b.id, complaint_request());

        let views = store.complaints_for_user(&a.id);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, mine.id);
        // Listings scoped to the caller omit the author.
        assert!(views[0].user.is_none());
    }

    #[test]
    fn list_complaints_populates_user_and_department() {
        let mut store = Store::new();
        let user = store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();
        let dept = store
            .create_department(CreateDepartmentRequest {
                dept_name: "Water Board".into(),
                dept_head: "Head".into(),
                email: "water@city.gov".into(),
                phone: "1112223334".into(),
                description: None,
            })
            .unwrap();

        let mut request = complaint_request();
        request.department = Some(dept.id.clone());
        store.create_complaint(&user.id, request);

        let views = store.list_complaints();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].user.as_ref().unwrap().email, "a@example.com");
        assert_eq!(views[0].department.as_ref().unwrap().dept_name, "Water Board");
    }

    #[test]
    fn unknown_department_reference_populates_as_none() {
        let mut store = Store::new();
        let user = store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();

        let mut request = complaint_request();
        request.department = Some("no-such-department".into());
        store.create_complaint(&user.id, request);

        let views = store.list_complaints();
        assert!(views[0].department.is_none());
    }

    #[test]
    fn update_complaint_applies_partial_changes() {
        let mut store = Store::new();
        let user = store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();
        let complaint = store.create_complaint(&user.id, complaint_request());

        let updated = store
            .update_complaint(
                &complaint.id,
                UpdateComplaintRequest {
                    status: Some(ComplaintStatus::Resolved),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, ComplaintStatus::Resolved);
        assert_eq!(updated.description, complaint.description);
    }

    #[test]
    fn missing_complaint_operations_return_not_found() {
        let mut store = Store::new();
        let err = store
            .update_complaint("missing", UpdateComplaintRequest::default())
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);

        let err = store.delete_complaint("missing").unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_department_name_is_rejected() {
        let mut store = Store::new();
        let request = CreateDepartmentRequest {
            dept_name: "Sanitation".into(),
            dept_head: "Head".into(),
            email: "san@city.gov".into(),
            phone: "1112223334".into(),
            description: None,
        };
        store.create_department(request.clone()).unwrap();

        let err = store.create_department(request).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Department already exists");
    }

    #[test]
    fn feedback_listing_populates_authors_and_filters_by_complaint() {
        let mut store = Store::new();
        let user = store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();
        let complaint = store.create_complaint(&user.id, complaint_request());
        let other = store.create_complaint(&user.id, complaint_request());

        store.create_feedback(&complaint.id, &user.id, 5, "quick fix".into());
        store.create_feedback(&other.id, &user.id, 2, String::new());

        let views = store.feedbacks_for_complaint(&complaint.id);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].rating, 5);
        assert_eq!(views[0].user.as_ref().unwrap().name, "Test");
    }

    #[test]
    fn duplicate_feedback_per_user_is_allowed() {
        // No uniqueness constraint on (user, complaint); observed behavior.
        let mut store = Store::new();
        let user = store.create_user(new_user("a@example.com", Role::Citizen)).unwrap();
        let complaint = store.create_complaint(&user.id, complaint_request());

        store.create_feedback(&complaint.id, &user.id, 4, String::new());
        store.create_feedback(&complaint.id, &user.id, 1, String::new());

        assert_eq!(store.feedbacks_for_complaint(&complaint.id).len(), 2);
    }
}
