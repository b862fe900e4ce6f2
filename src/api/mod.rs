// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::Role,
    models::{
        AuthResponse, Complaint, ComplaintCategory, ComplaintResponse, ComplaintStatus,
        ComplaintView, CreateComplaintRequest, CreateDepartmentRequest, CreateFeedbackRequest,
        Department, DepartmentResponse, DepartmentSummary, Feedback, FeedbackResponse,
        FeedbackView, LoginRequest, MessageResponse, PublicUser, RegisterRequest,
        UpdateComplaintRequest, UpdateDepartmentRequest, UserSummary,
    },
    state::AppState,
};

pub mod complaints;
pub mod departments;
pub mod feedbacks;
pub mod users;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .route("/users/profile", get(users::profile))
        .route("/users/all", get(users::all_users))
        .route(
            "/complaints",
            get(complaints::all_complaints).post(complaints::create_complaint),
        )
        .route("/complaints/my", get(complaints::my_complaints))
        .route(
            "/complaints/{id}",
            get(complaints::complaint_detail)
                .put(complaints::update_complaint)
                .delete(complaints::delete_complaint),
        )
        .route(
            "/departments",
            get(departments::list_departments).post(departments::create_department),
        )
        .route(
            "/departments/{id}",
            get(departments::department_detail)
                .put(departments::update_department)
                .delete(departments::delete_department),
        )
        .route(
            "/feedbacks/{complaint_id}",
            post(feedbacks::create_feedback).get(feedbacks::list_feedbacks),
        )
        .with_state(state);

    Router::new()
        .route("/", get(root))
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe.
async fn root() -> &'static str {
    "Public Complaint Portal API Running..."
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::register,
        users::login,
        users::profile,
        users::all_users,
        complaints::create_complaint,
        complaints::my_complaints,
        complaints::all_complaints,
        complaints::complaint_detail,
        complaints::update_complaint,
        complaints::delete_complaint,
        departments::list_departments,
        departments::department_detail,
        departments::create_department,
        departments::update_department,
        departments::delete_department,
        feedbacks::create_feedback,
        feedbacks::list_feedbacks
    ),
    components(
        schemas(
            Role,
            ComplaintCategory,
            ComplaintStatus,
            PublicUser,
            UserSummary,
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            Department,
            DepartmentSummary,
            CreateDepartmentRequest,
            UpdateDepartmentRequest,
            DepartmentResponse,
            Complaint,
            ComplaintView,
            CreateComplaintRequest,
            UpdateComplaintRequest,
            ComplaintResponse,
            Feedback,
            FeedbackView,
            CreateFeedbackRequest,
            FeedbackResponse,
            MessageResponse
        )
    ),
    tags(
        (name = "Users", description = "Registration, login, and profiles"),
        (name = "Complaints", description = "Complaint filing and lifecycle"),
        (name = "Departments", description = "Municipal department management"),
        (name = "Feedbacks", description = "Post-resolution feedback")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::with_secret(b"router-test-secret"));
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }
}
