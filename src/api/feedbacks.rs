// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Feedback on resolved complaints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::Auth,
    error::ApiError,
    lifecycle,
    models::{CreateFeedbackRequest, FeedbackResponse, FeedbackView, COMMENT_MAX},
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/feedbacks/{complaint_id}",
    params(("complaint_id" = String, Path, description = "Complaint id")),
    request_body = CreateFeedbackRequest,
    tag = "Feedbacks",
    responses(
        (status = 201, body = FeedbackResponse),
        (status = 400, description = "Complaint not yet resolved, or rating out of range"),
        (status = 404)
    )
)]
pub async fn create_feedback(
    Path(complaint_id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateFeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackResponse>), ApiError> {
    if !(1..=5).contains(&request.rating) {
        return Err(ApiError::validation("Rating must be between 1 and 5"));
    }
    let comment = request.comment.unwrap_or_default();
    if comment.len() > COMMENT_MAX {
        return Err(ApiError::validation(
            "Comment must be at most 500 characters",
        ));
    }

    let mut store = state.store.write().await;
    let status = store
        .complaint_by_id(&complaint_id)
        .ok_or_else(|| ApiError::not_found("Complaint not found"))?
        .status;

    if !lifecycle::can_submit_feedback(status) {
        return Err(ApiError::state("Feedback allowed only after resolution"));
    }

    let feedback = store.create_feedback(&complaint_id, &user.id, request.rating, comment);

    Ok((
        StatusCode::CREATED,
        Json(FeedbackResponse {
            message: "Feedback submitted successfully".to_string(),
            feedback,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/feedbacks/{complaint_id}",
    params(("complaint_id" = String, Path, description = "Complaint id")),
    tag = "Feedbacks",
    responses((status = 200, body = [FeedbackView]), (status = 401))
)]
pub async fn list_feedbacks(
    Path(complaint_id): Path<String>,
    State(state): State<AppState>,
    Auth(_user): Auth,
) -> Result<Json<Vec<FeedbackView>>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.feedbacks_for_complaint(&complaint_id)))
}
