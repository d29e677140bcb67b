// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! File attachment endpoints.
//!
//! Uploads land in the per-user vault under the chosen category; the
//! on-disk name is generated, never the caller's filename. Downloads stream
//! the blob back under the original filename.

use std::io;

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::{FileCategory, StoredFile};
use crate::state::AppState;
use crate::vault::{FileVault, VaultError};

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub file_id: String,
    /// Original filename as supplied by the client.
    pub filename: String,
    /// On-disk size in bytes.
    pub size: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FileListResponse {
    pub success: bool,
    pub files: Vec<StoredFile>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteFileResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/files/upload/{will_id}",
    params(("will_id" = String, Path, description = "Will to attach the file to")),
    tag = "Files",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = UploadResponse),
        (status = 400, description = "Malformed multipart body"),
        (status = 404, description = "Will not found or not owned by caller")
    )
)]
pub async fn upload_file(
    Path(will_id): Path<String>,
    State(state): State<AppState>,
    Auth(caller): Auth,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    // Parent ownership first: an unowned will must 404 before any parsing
    // side effects.
    {
        let store = state.store.read().await;
        store.will(&will_id, &caller)?;
    }

    let mut filename: Option<String> = None;
    let mut bytes: Option<axum::body::Bytes> = None;
    let mut category: Option<FileCategory> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart body"))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|_| ApiError::bad_request("Malformed multipart body"))?,
                );
            }
            Some("file_type") => {
                let tag = field
                    .text()
                    .await
                    .map_err(|_| ApiError::bad_request("Malformed multipart body"))?;
                category = Some(
                    FileCategory::from_tag(&tag)
                        .ok_or_else(|| ApiError::bad_request("Unknown file_type"))?,
                );
            }
            _ => {}
        }
    }

    let filename = filename.ok_or_else(|| ApiError::bad_request("Missing file field"))?;
    let bytes = bytes.ok_or_else(|| ApiError::bad_request("Missing file field"))?;
    let category = category.ok_or_else(|| ApiError::bad_request("Missing file_type field"))?;

    state
        .vault
        .provision_user(&caller)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let stored_filename = FileVault::stored_name(&filename);
    let (file_path, size) = state
        .vault
        .save(&caller, category, &stored_filename, &bytes)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    let file = StoredFile {
        id: Uuid::new_v4().to_string(),
        user_id: caller,
        will_id,
        filename: filename.clone(),
        stored_filename,
        file_type: category,
        file_path,
        size,
        created_at: Utc::now(),
    };
    let file_id = file.id.clone();
    state.store.write().await.insert_file(file);

    info!(file_id = %file_id, size, "file uploaded");

    Ok(Json(UploadResponse {
        success: true,
        message: "File uploaded successfully".to_string(),
        file_id,
        filename,
        size,
    }))
}

#[utoipa::path(
    get,
    path = "/api/files/list/{will_id}",
    params(("will_id" = String, Path, description = "Will whose attachments to list")),
    tag = "Files",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = FileListResponse),
        (status = 404, description = "Will not found or not owned by caller")
    )
)]
pub async fn list_files(
    Path(will_id): Path<String>,
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<FileListResponse>, ApiError> {
    let store = state.store.read().await;
    store.will(&will_id, &caller)?;

    Ok(Json(FileListResponse {
        success: true,
        files: store.files_for_will(&will_id, &caller),
    }))
}

#[utoipa::path(
    get,
    path = "/api/files/download/{file_id}",
    params(("file_id" = String, Path, description = "Attachment to download")),
    tag = "Files",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Binary content under the original filename"),
        (status = 404, description = "File not found, not owned, or missing on disk")
    )
)]
pub async fn download_file(
    Path(file_id): Path<String>,
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Response, ApiError> {
    let file = {
        let store = state.store.read().await;
        store.file(&file_id, &caller)?.clone()
    };

    let bytes = match state.vault.read(&file.file_path).await {
        Ok(bytes) => bytes,
        Err(VaultError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ApiError::not_found("File not found on disk"));
        }
        Err(e) => return Err(ApiError::internal(e.to_string())),
    };

    // Content type comes from the original filename, not the stored one.
    let content_type = mime_guess::from_path(&file.filename).first_or_octet_stream();
    let headers = [
        (header::CONTENT_TYPE, content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", file.filename),
        ),
    ];

    Ok((headers, bytes).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/files/{file_id}",
    params(("file_id" = String, Path, description = "Attachment to delete")),
    tag = "Files",
    security(("bearer_token" = [])),
    responses(
        (status = 200, body = DeleteFileResponse),
        (status = 404, description = "File not found or not owned by caller")
    )
)]
pub async fn delete_file(
    Path(file_id): Path<String>,
    State(state): State<AppState>,
    Auth(caller): Auth,
) -> Result<Json<DeleteFileResponse>, ApiError> {
    let file = {
        let store = state.store.read().await;
        store.file(&file_id, &caller)?.clone()
    };

    // Blob first; an already-missing blob must not block record removal.
    state
        .vault
        .remove(&file.file_path)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;
    state.store.write().await.remove_file(&file_id, &caller)?;

    info!(file_id = %file_id, "file deleted");

    Ok(Json(DeleteFileResponse {
        success: true,
        message: "File deleted successfully".to_string(),
    }))
}
