// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Drafting assistance endpoint.
//!
//! This endpoint answers 200 even when the provider is down: the gateway
//! converts every failure into a fixed unavailability message.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::AssistRequest;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct AssistResponse {
    pub success: bool,
    /// Provider reply, or the fixed unavailability message.
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/api/ai/assist",
    request_body = AssistRequest,
    tag = "Assistance",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = AssistResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn ai_assist(
    State(state): State<AppState>,
    Auth(_caller): Auth,
    Json(request): Json<AssistRequest>,
) -> Result<Json<AssistResponse>, ApiError> {
    let response = state
        .assist
        .assist(&request.query, &request.language, &request.will_context)
        .await;

    Ok(Json(AssistResponse {
        success: true,
        response,
    }))
}
