// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

//! Department CRUD. Reads are public; mutation is admin-only.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::{
        policy::{self, Action, Resource},
        Auth,
    },
    error::ApiError,
    models::{
        valid_phone, CreateDepartmentRequest, Department, DepartmentResponse, MessageResponse,
        UpdateDepartmentRequest,
    },
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/departments",
    tag = "Departments",
    responses((status = 200, body = [Department]))
)]
pub async fn list_departments(State(state): State<AppState>) -> Json<Vec<Department>> {
    let store = state.store.read().await;
    Json(store.list_departments())
}

#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(("id" = String, Path, description = "Department id")),
    tag = "Departments",
    responses((status = 200, body = Department), (status = 404))
)]
pub async fn department_detail(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Department>, ApiError> {
    let store = state.store.read().await;
    store
        .department_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Department not found"))
}

#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentRequest,
    tag = "Departments",
    responses((status = 201, body = DepartmentResponse), (status = 400), (status = 403))
)]
pub async fn create_department(
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), ApiError> {
    policy::authorize(Some(&user), Resource::Departments, Action::Create)?;

    if request.dept_name.trim().is_empty() || request.dept_head.trim().is_empty() {
        return Err(ApiError::validation(
            "Department name and head are required",
        ));
    }
    if !valid_phone(&request.phone) {
        return Err(ApiError::validation("Phone must be exactly 10 digits"));
    }

    let mut store = state.store.write().await;
    let department = store.create_department(request)?;

    Ok((
        StatusCode::CREATED,
        Json(DepartmentResponse {
            message: "Department created successfully".to_string(),
            department,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(("id" = String, Path, description = "Department id")),
    request_body = UpdateDepartmentRequest,
    tag = "Departments",
    responses((status = 200, body = DepartmentResponse), (status = 403), (status = 404))
)]
pub async fn update_department(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
    Json(request): Json<UpdateDepartmentRequest>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    policy::authorize(Some(&user), Resource::Departments, Action::Update)?;

    let mut store = state.store.write().await;
    let department = store.update_department(&id, request)?;

    Ok(Json(DepartmentResponse {
        message: "Department updated successfully".to_string(),
        department,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(("id" = String, Path, description = "Department id")),
    tag = "Departments",
    responses((status = 200, body = MessageResponse), (status = 403), (status = 404))
)]
pub async fn delete_department(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<MessageResponse>, ApiError> {
    policy::authorize(Some(&user), Resource::Departments, Action::Delete)?;

    let mut store = state.store.write().await;
    store.delete_department(&id)?;

    Ok(Json(MessageResponse {
        message: "Department deleted successfully".to_string(),
    }))
}
