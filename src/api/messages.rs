// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Message send endpoint.
//!
//! This is an explicit stub. A [`MessageRecord`] is built and echoed back
//! with status `pending`; no email, WhatsApp, or call integration exists
//! and the record is not kept anywhere.

use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::{MessageRecord, SendMessageRequest};

#[derive(Debug, Serialize, ToSchema)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message: String,
    pub message_id: String,
}

#[utoipa::path(
    post,
    path = "/api/messages/send",
    request_body = SendMessageRequest,
    tag = "Messages",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = SendMessageResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn send_message(
    Auth(caller): Auth,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let record = MessageRecord {
        id: Uuid::new_v4().to_string(),
        sender_id: caller,
        recipient_name: request.recipient_name,
        recipient_email: request.recipient_email,
        recipient_phone: request.recipient_phone,
        message_text: request.message_text,
        preference: request.preference,
        will_id: request.will_id,
        sent_at: Utc::now(),
        status: "pending".to_string(),
    };

    info!(message_id = %record.id, preference = %record.preference, "message recorded (delivery is a stub)");

    Ok(Json(SendMessageResponse {
        success: true,
        message: format!("Message queued for delivery via {}", record.preference),
        message_id: record.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    #[tokio::test]
    async fn send_always_succeeds_with_pending_stub() {
        let Json(response) = send_message(
            Auth(UserId::from("a@x.com_555")),
            Json(SendMessageRequest {
                recipient_name: "Executor".into(),
                recipient_email: "exec@x.com".into(),
                recipient_phone: "777".into(),
                message_text: "Please keep a copy of my will.".into(),
                preference: "whatsapp".into(),
                will_id: None,
            }),
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(response.message, "Message queued for delivery via whatsapp");
        assert!(!response.message_id.is_empty());
    }

    #[tokio::test]
    async fn message_ids_are_unique_per_call() {
        let request = SendMessageRequest {
            recipient_name: "Executor".into(),
            recipient_email: "exec@x.com".into(),
            recipient_phone: "777".into(),
            message_text: "m".into(),
            preference: "email".into(),
            will_id: Some("will-1".into()),
        };

        let Json(first) = send_message(Auth(UserId::from("u")), Json(request.clone()))
            .await
            .unwrap();
        let Json(second) = send_message(Auth(UserId::from("u")), Json(request))
            .await
            .unwrap();
        assert_ne!(first.message_id, second.message_id);
    }
}
