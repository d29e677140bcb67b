// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User profile endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::UserId;
use crate::state::AppState;

/// Response for GET /api/user/profile. Never includes the password digest.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: UserId,
    pub email: String,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = "Users",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = ProfileResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found")
    )
)]
pub async fn profile(
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<ProfileResponse>, ApiError> {
    let store = state.store.read().await;
    let user = store
        .user(&caller)
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        user_id: user.id.clone(),
        email: user.email.clone(),
        mobile: user.mobile.clone(),
        created_at: user.created_at,
    }))
}
