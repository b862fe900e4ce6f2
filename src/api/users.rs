// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Public Complaint Portal

use axum::{extract::State, http::StatusCode, Json};
use tracing::error;

use crate::{
    auth::{
        password,
        policy::{self, Action, Resource},
        Auth, Role,
    },
    error::ApiError,
    models::{valid_phone, AuthResponse, LoginRequest, PublicUser, RegisterRequest},
    state::AppState,
    store::NewUser,
};

/// Run an argon2 operation off the cooperative scheduler.
async fn blocking<T, F>(work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        error!(error = %e, "password hashing task failed");
        ApiError::internal()
    })
}

#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterRequest,
    tag = "Users",
    responses(
        (status = 201, body = AuthResponse),
        (status = 400, description = "Duplicate email or invalid fields")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
        || request.address.trim().is_empty()
    {
        return Err(ApiError::validation(
            "Name, email, password, phone and address are required",
        ));
    }
    if !valid_phone(&request.phone) {
        return Err(ApiError::validation("Phone must be exactly 10 digits"));
    }

    // Unrecognized or absent requested roles fall back to citizen.
    let role = request
        .role
        .as_deref()
        .and_then(Role::parse)
        .unwrap_or_default();

    let password = request.password.clone();
    let password_hash = blocking(move || password::hash_password(&password))
        .await?
        .map_err(|e| {
            error!(error = %e, "password hashing failed");
            ApiError::internal()
        })?;

    // Duplicate check and insert happen under one write lock.
    let user = {
        let mut store = state.store.write().await;
        store.create_user(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
            phone: request.phone,
            address: request.address,
            role,
        })?
    };

    let token = state.auth.mint(&user.id, user.role)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful".to_string(),
            token,
            user: PublicUser::from(&user),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    tag = "Users",
    responses(
        (status = 200, body = AuthResponse),
        (status = 400, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    // Unknown email and wrong password yield the same message so login
    // cannot be used to enumerate accounts.
    let invalid_credentials = || ApiError::validation("Invalid credentials");

    let (user, stored_hash) = {
        let store = state.store.read().await;
        match store.user_by_email(&request.email) {
            Some(user) => (PublicUser::from(user), user.password_hash.clone()),
            None => return Err(invalid_credentials()),
        }
    };

    let password = request.password.clone();
    let matches = blocking(move || password::verify_password(&password, &stored_hash)).await?;
    if !matches {
        return Err(invalid_credentials());
    }

    let token = state.auth.mint(&user.id, user.role)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user,
    }))
}

#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "Users",
    responses((status = 200, body = PublicUser), (status = 401))
)]
pub async fn profile(Auth(user): Auth) -> Json<PublicUser> {
    // The extractor already resolved the identity fresh from the store.
    Json(user)
}

#[utoipa::path(
    get,
    path = "/api/users/all",
    tag = "Users",
    responses((status = 200, body = [PublicUser]), (status = 403))
)]
pub async fn all_users(
    State(state): State<AppState>,
    Auth(user): Auth,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    policy::authorize(Some(&user), Resource::Users, Action::List)?;

    let store = state.store.read().await;
    Ok(Json(store.list_users()))
}
