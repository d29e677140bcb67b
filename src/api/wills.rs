// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Will CRUD endpoints.
//!
//! Every operation is owner-scoped: a will that does not exist and a will
//! owned by someone else both answer 404.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::{CreateWillRequest, UpdateWillRequest, Will};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateWillResponse {
    pub success: bool,
    pub message: String,
    pub will_id: String,
    /// Suggestion text when `ai_assisted` was set, otherwise null.
    pub ai_suggestions: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WillListResponse {
    pub success: bool,
    pub wills: Vec<Will>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WillResponse {
    pub success: bool,
    pub will: Will,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateWillResponse {
    pub success: bool,
    pub message: String,
    /// Suggestion text when `ai_assisted` was set, otherwise null.
    pub ai_suggestions: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/wills/create",
    request_body = CreateWillRequest,
    tag = "Wills",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = CreateWillResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn create_will(
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<CreateWillRequest>,
) -> Result<Json<CreateWillResponse>, ApiError> {
    // The provider call happens outside the store lock; it can block for
    // the full provider timeout. With no content to improve the flag still
    // yields an empty suggestion string rather than null.
    let ai_suggestions = if request.ai_assisted {
        if request.content.is_empty() {
            Some(String::new())
        } else {
            Some(
                state
                    .assist
                    .improve_content(&request.content, request.language)
                    .await,
            )
        }
    } else {
        None
    };

    let will = state.store.write().await.create_will(
        caller,
        request,
        ai_suggestions.clone().unwrap_or_default(),
    );

    info!(will_id = %will.id, user_id = %will.user_id, "will created");

    Ok(Json(CreateWillResponse {
        success: true,
        message: "Will created successfully".to_string(),
        will_id: will.id,
        ai_suggestions,
    }))
}

#[utoipa::path(
    get,
    path = "/api/wills/list",
    tag = "Wills",
    security(("bearer_token" = [])),
    responses((status = 200, body = WillListResponse))
)]
pub async fn list_wills(
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<WillListResponse>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(WillListResponse {
        success: true,
        wills: store.list_wills(&caller),
    }))
}

#[utoipa::path(
    get,
    path = "/api/wills/{will_id}",
    params(("will_id" = String, Path, description = "Identifier of the will")),
    tag = "Wills",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = WillResponse),
        (status = 404, description = "Will not found or not owned by caller")
    )
)]
pub async fn get_will(
    Path(will_id): Path<String>,
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<WillResponse>, ApiError> {
    let store = state.store.read().await;
    let will = store.will(&will_id, &caller)?.clone();
    Ok(Json(WillResponse {
        success: true,
        will,
    }))
}

#[utoipa::path(
    put,
    path = "/api/wills/{will_id}",
    params(("will_id" = String, Path, description = "Identifier of the will")),
    request_body = UpdateWillRequest,
    tag = "Wills",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = UpdateWillResponse),
        (status = 404, description = "Will not found or not owned by caller")
    )
)]
pub async fn update_will(
    Path(will_id): Path<String>,
    State(state): State<AppState>,
    Auth(caller): Auth,
    Json(request): Json<UpdateWillRequest>,
) -> Result<Json<UpdateWillResponse>, ApiError> {
    // Resolve the effective content and language up front; the ownership
    // check here also rejects unknown or unowned wills before the provider
    // call.
    let (content, language) = {
        let store = state.store.read().await;
        let existing = store.will(&will_id, &caller)?;
        (
            request.content.clone().unwrap_or_else(|| existing.content.clone()),
            request.language.unwrap_or(existing.language),
        )
    };

    let ai_suggestions = if request.ai_assisted {
        if content.is_empty() {
            Some(String::new())
        } else {
            Some(state.assist.improve_content(&content, language).await)
        }
    } else {
        None
    };

    let will = state.store.write().await.update_will(
        &will_id,
        &caller,
        request,
        ai_suggestions.clone(),
    )?;

    info!(will_id = %will.id, user_id = %will.user_id, "will updated");

    Ok(Json(UpdateWillResponse {
        success: true,
        message: "Will updated successfully".to_string(),
        ai_suggestions,
    }))
}
