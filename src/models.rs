// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and domain data structures for the will-writing API. Wire types
//! derive `Serialize`/`Deserialize` plus `ToSchema` for the OpenAPI document.
//!
//! ## User Identity
//!
//! The [`UserId`] newtype wraps the composite identity derived from a user's
//! email and mobile number. The derivation is deterministic, so a signup with
//! the same email and mobile always maps to the same identity.
//!
//! ## Model Categories
//!
//! - **Users**: credential records (never serialized to clients directly)
//! - **Wills**: draft legal documents owned by a single user
//! - **Files**: attachments stored in the per-user vault
//! - **Messages**: transient records of stub send requests

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// User Identity Type
// =============================================================================

/// Composite user identity: `{email}_{mobile}`.
///
/// Provides type safety for owner checks throughout the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub String);

impl UserId {
    /// Derive the canonical identity for an email/mobile pair.
    pub fn derive(email: &str, mobile: &str) -> Self {
        UserId(format!("{email}_{mobile}"))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId(value.to_string())
    }
}

// =============================================================================
// Enumerations
// =============================================================================

/// Languages supported for will content and drafting assistance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Telugu,
}

impl Language {
    /// Lowercase tag as it appears on the wire.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Telugu => "telugu",
        }
    }
}

/// Attachment categories, each mapping to a subdirectory of the user's vault.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Audio,
    Video,
    #[serde(alias = "document")]
    Documents,
}

impl FileCategory {
    /// Subdirectory name inside the user's vault.
    pub fn dir_name(&self) -> &'static str {
        match self {
            FileCategory::Audio => "audio",
            FileCategory::Video => "video",
            FileCategory::Documents => "documents",
        }
    }

    /// Parse the category tag from a multipart form field.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "audio" => Some(FileCategory::Audio),
            "video" => Some(FileCategory::Video),
            "document" | "documents" => Some(FileCategory::Documents),
            _ => None,
        }
    }
}

// =============================================================================
// User Models
// =============================================================================

/// A registered user. Not serialized to clients; the profile endpoint
/// returns [`crate::api::users::ProfileResponse`] instead, which omits
/// the password digest.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub mobile: String,
    /// Hex-encoded SHA-256 digest. The plaintext is never stored.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /api/auth/signup.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub confirm_password: String,
}

/// Request body for POST /api/auth/login.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email or mobile number.
    pub username: String,
    pub password: String,
}

// =============================================================================
// Will Models
// =============================================================================

/// A draft will document. Only the owner can read or modify it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Will {
    /// Unique identifier for this will.
    pub id: String,
    /// The owning user.
    pub user_id: UserId,
    /// Document title.
    pub title: String,
    /// Language the will is written in.
    pub language: Language,
    /// Free-text document content.
    pub content: String,
    /// Latest assistance-generated suggestion text (empty if none).
    pub ai_suggestions: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new will.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateWillRequest {
    pub title: String,
    pub language: Language,
    #[serde(default)]
    pub content: String,
    /// When set, the gateway is asked to improve the content and its reply
    /// is stored in `ai_suggestions`.
    #[serde(default)]
    pub ai_assisted: bool,
}

/// Partial update for an existing will. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateWillRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub ai_assisted: bool,
}

// =============================================================================
// File Models
// =============================================================================

/// An attachment stored in the per-user vault.
///
/// The stored filename is generated and never derived from the caller's
/// filename, so uploads cannot collide or traverse the vault tree.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StoredFile {
    /// Unique identifier for this attachment.
    pub id: String,
    /// The owning user (always equals the parent will's owner).
    pub user_id: UserId,
    /// The will this file is attached to.
    pub will_id: String,
    /// Original filename as supplied by the client.
    pub filename: String,
    /// Generated on-disk name: a fresh UUID plus the original extension.
    pub stored_filename: String,
    /// Attachment category.
    pub file_type: FileCategory,
    /// Absolute path of the blob inside the vault.
    #[schema(value_type = String)]
    pub file_path: PathBuf,
    /// On-disk size in bytes, measured after the write.
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Message Models
// =============================================================================

/// A transient record of a send request.
///
/// Delivery is a stub: the record is built, returned, and dropped. No email,
/// WhatsApp, or call integration exists.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageRecord {
    pub id: String,
    pub sender_id: UserId,
    pub recipient_name: String,
    pub recipient_email: String,
    pub recipient_phone: String,
    pub message_text: String,
    /// Preferred delivery channel (whatsapp, email, call).
    pub preference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_id: Option<String>,
    pub sent_at: DateTime<Utc>,
    /// Always `pending`; nothing ever dispatches it.
    pub status: String,
}

/// Request body for POST /api/messages/send.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub recipient_name: String,
    pub recipient_email: String,
    pub recipient_phone: String,
    pub message_text: String,
    /// Preferred delivery channel (whatsapp, email, call).
    pub preference: String,
    #[serde(default)]
    pub will_id: Option<String>,
}

// =============================================================================
// Assistance Models
// =============================================================================

/// Request body for POST /api/ai/assist.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssistRequest {
    pub query: String,
    /// Language tag; unknown values fall back to english.
    pub language: String,
    #[serde(default)]
    pub will_context: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_derivation_is_deterministic() {
        let a = UserId::derive("a@x.com", "555");
        let b = UserId::derive("a@x.com", "555");
        assert_eq!(a, b);
        assert_eq!(a.0, "a@x.com_555");
    }

    #[test]
    fn language_tags_round_trip() {
        for lang in [Language::English, Language::Hindi, Language::Telugu] {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.as_tag()));
            let back: Language = serde_json::from_str(&json).unwrap();
            assert_eq!(back, lang);
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(serde_json::from_str::<Language>("\"klingon\"").is_err());
    }

    #[test]
    fn file_category_accepts_singular_document() {
        let cat: FileCategory = serde_json::from_str("\"document\"").unwrap();
        assert_eq!(cat, FileCategory::Documents);
        assert_eq!(cat.dir_name(), "documents");

        assert_eq!(FileCategory::from_tag("document"), Some(FileCategory::Documents));
        assert_eq!(FileCategory::from_tag("audio"), Some(FileCategory::Audio));
        assert_eq!(FileCategory::from_tag("gif"), None);
    }

    #[test]
    fn update_request_defaults_to_no_changes() {
        let update: UpdateWillRequest = serde_json::from_str("{}").unwrap();
        assert!(update.title.is_none());
        assert!(update.language.is_none());
        assert!(update.content.is_none());
        assert!(!update.ai_assisted);
    }
}
