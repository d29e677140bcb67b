// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signup and login endpoints. These are the only mutating endpoints that
//! do not require a bearer token.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::auth::{password, token};
use crate::error::ApiError;
use crate::models::{LoginRequest, SignupRequest, UserId};
use crate::state::AppState;

/// Response for both signup and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    /// Session token, valid for 24 hours.
    pub access_token: String,
    pub user_id: UserId,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    tag = "Auth",
    responses(
        (status = 200, body = AuthResponse),
        (status = 400, description = "Password mismatch or duplicate user")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.password != request.confirm_password {
        return Err(ApiError::bad_request("Passwords do not match"));
    }

    let password_hash = password::hash_password(&request.password);
    let user = {
        let mut store = state.store.write().await;
        store.register_user(request.email, request.mobile, password_hash)?
    };

    state
        .vault
        .provision_user(&user.id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let access_token = token::issue(&user.id, &state.config.secret_key)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    info!(user_id = %user.id, "user registered");

    Ok(Json(AuthResponse {
        success: true,
        message: "User created successfully".to_string(),
        access_token,
        user_id: user.id,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (user_id, password_hash) = {
        let store = state.store.read().await;
        let user = store
            .find_user_by_login(&request.username)
            .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;
        (user.id.clone(), user.password_hash.clone())
    };

    if !password::verify_password(&request.password, &password_hash) {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let access_token = token::issue(&user_id, &state.config.secret_key)
        .map_err(|e| ApiError::internal(e.to_string()))?;

    info!(user_id = %user_id, "user logged in");

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        access_token,
        user_id,
    }))
}
