// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::{
    auth::{
        policy::{self, Action, Resource},
        Auth,
    },
    error::ApiError,
    lifecycle,
    models::{
        ComplaintResponse, ComplaintView, CreateComplaintRequest, MessageResponse,
        UpdateComplaintRequest, DESCRIPTION_MAX, LOCATION_MAX,
    },
    state::AppState,
};

fn validate_text(description: &str, location: &str) -> Result<(), ApiError> {
    if description.trim().is_empty() {
        return Err(ApiError::validation("Description is required"));
    }
    if description.len() > DESCRIPTION_MAX {
        return Err(ApiError::validation(
            "Description must be at most 1000 characters",
        ));
    }
    if location.trim().is_empty() {
        return Err(ApiError::validation("Location is required"));
    }
    if location.len() > LOCATION_MAX {
        return Err(ApiError::validation(
            "Location must be at most 255 characters",
        ));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintRequest,
    tag = "Complaints",
    responses((status = 201, body = ComplaintResponse), (status = 400), (status = 401))
)]
pub async fn create_complaint(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateComplaintRequest>,
) -> Result<(StatusCode, Json<ComplaintResponse>), ApiError> {
    validate_text(&request.description, &request.location)?;

    let mut store = state.store.write().await;
    let complaint = store.create_complaint(&user.id, request);

    Ok((
        StatusCode::CREATED,
        Json(ComplaintResponse {
            message: "Complaint submitted successfully".to_string(),
            complaint,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/complaints/my",
    tag = "Complaints",
    responses((status = 200, body = [ComplaintView]), (status = 401))
)]
pub async fn my_complaints(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<Vec<ComplaintView>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.complaints_for_user(&user.id)))
}

#[utoipa::path(
    get,
    path = "/api/complaints",
    tag = "Complaints",
    responses((status = 200, body = [ComplaintView]), (status = 403))
)]
pub async fn all_complaints(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<Vec<ComplaintView>>, ApiError> {
    policy::authorize(Some(&user), Resource::Complaints, Action::List)?;

    let store = state.store.read().await;
    Ok(Json(store.list_complaints()))
}

#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    tag = "Complaints",
    responses((status = 200, body = ComplaintView), (status = 404))
)]
pub async fn complaint_detail(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(_user): Auth,
) -> Result<Json<ComplaintView>, ApiError> {
    let store = state.store.read().await;
    store
        .complaint_view_by_id(&id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Complaint not found"))
}

#[utoipa::path(
    put,
    path = "/api/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    request_body = UpdateComplaintRequest,
    tag = "Complaints",
    responses((status = 200, body = ComplaintResponse), (status = 403), (status = 404))
)]
pub async fn update_complaint(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<UpdateComplaintRequest>,
) -> Result<Json<ComplaintResponse>, ApiError> {
    policy::authorize(Some(&user), Resource::Complaints, Action::Update)?;

    let mut store = state.store.write().await;
    let current = store
        .complaint_by_id(&id)
        .ok_or_else(|| ApiError::not_found("Complaint not found"))?
        .status;

    if let Some(next) = request.status {
        if !lifecycle::status_change_allowed(current, next, user.role) {
            return Err(ApiError::state("Status change not permitted"));
        }
    }

    let complaint = store.update_complaint(&id, request)?;

    Ok(Json(ComplaintResponse {
        message: "Complaint updated successfully".to_string(),
        complaint,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    params(("id" = String, Path, description = "Complaint id")),
    tag = "Complaints",
    responses((status = 200, body = MessageResponse), (status = 404))
)]
pub async fn delete_complaint(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    let complaint = store.delete_complaint(&id)?;

    // TODO: confirm with product whether deletion should require ownership
    // or a privileged role; today any authenticated user may delete any
    // complaint, so the gap is at least made visible in the logs.
    let capability = lifecycle::capability(&user.id, user.role, &complaint.user);
    if !capability.is_owner && !capability.is_privileged {
        warn!(
            complaint_id = %complaint.id,
            owner_id = %complaint.user,
            caller_id = %user.id,
            caller_role = %user.role,
            "complaint deleted by a caller who is neither its owner nor privileged"
        );
    }

    Ok(Json(MessageResponse {
        message: "Complaint deleted successfully".to_string(),
    }))
}
