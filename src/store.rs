// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory store for users, wills, and attachments.
//!
//! All maps are unbounded and live for the process lifetime; nothing here
//! persists across restarts. Every accessor that takes a caller identity
//! applies the same ownership rule: a record that is absent and a record
//! owned by someone else both answer "not found", so callers cannot tell
//! the difference.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{CreateWillRequest, StoredFile, UpdateWillRequest, User, UserId, Will};

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<UserId, User>,
    wills: HashMap<String, Will>,
    files: HashMap<String, StoredFile>,
    // HashMap iteration order is arbitrary; these preserve insertion order
    // for list endpoints.
    will_order: Vec<String>,
    file_order: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Users ==========

    /// Insert a new user record. The password must already be digested.
    pub fn register_user(
        &mut self,
        email: String,
        mobile: String,
        password_hash: String,
    ) -> Result<User, ApiError> {
        let id = UserId::derive(&email, &mobile);
        if self.users.contains_key(&id) {
            return Err(ApiError::bad_request("User already exists"));
        }

        let user = User {
            id: id.clone(),
            email,
            mobile,
            password_hash,
            created_at: Utc::now(),
        };
        self.users.insert(id, user.clone());
        Ok(user)
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// Linear scan for a user whose email or mobile matches the login name.
    pub fn find_user_by_login(&self, username: &str) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.email == username || user.mobile == username)
    }

    // ========== Wills ==========

    pub fn create_will(
        &mut self,
        owner: UserId,
        request: CreateWillRequest,
        ai_suggestions: String,
    ) -> Will {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let will = Will {
            id: id.clone(),
            user_id: owner,
            title: request.title,
            language: request.language,
            content: request.content,
            ai_suggestions,
            created_at: now,
            updated_at: now,
        };
        self.wills.insert(id.clone(), will.clone());
        self.will_order.push(id);
        will
    }

    /// Fetch a will the caller owns. Absent and unowned are indistinguishable.
    pub fn will(&self, will_id: &str, caller: &UserId) -> Result<&Will, ApiError> {
        self.wills
            .get(will_id)
            .filter(|will| &will.user_id == caller)
            .ok_or_else(|| ApiError::not_found("Will not found"))
    }

    /// Wills owned by the caller, in insertion order.
    pub fn list_wills(&self, caller: &UserId) -> Vec<Will> {
        self.will_order
            .iter()
            .filter_map(|id| self.wills.get(id))
            .filter(|will| &will.user_id == caller)
            .cloned()
            .collect()
    }

    /// Partial merge: provided fields overwrite, omitted fields are kept.
    /// `ai_suggestions` is replaced only when new suggestion text is supplied.
    pub fn update_will(
        &mut self,
        will_id: &str,
        caller: &UserId,
        update: UpdateWillRequest,
        ai_suggestions: Option<String>,
    ) -> Result<Will, ApiError> {
        let will = self
            .wills
            .get_mut(will_id)
            .filter(|will| &will.user_id == caller)
            .ok_or_else(|| ApiError::not_found("Will not found"))?;

        if let Some(title) = update.title {
            will.title = title;
        }
        if let Some(language) = update.language {
            will.language = language;
        }
        if let Some(content) = update.content {
            will.content = content;
        }
        if let Some(suggestions) = ai_suggestions {
            will.ai_suggestions = suggestions;
        }
        will.updated_at = Utc::now();

        Ok(will.clone())
    }

    // ========== Files ==========

    pub fn insert_file(&mut self, file: StoredFile) {
        self.file_order.push(file.id.clone());
        self.files.insert(file.id.clone(), file);
    }

    /// Fetch a file the caller owns. Absent and unowned are indistinguishable.
    pub fn file(&self, file_id: &str, caller: &UserId) -> Result<&StoredFile, ApiError> {
        self.files
            .get(file_id)
            .filter(|file| &file.user_id == caller)
            .ok_or_else(|| ApiError::not_found("File not found"))
    }

    /// Attachments of one will, in insertion order. The caller's ownership
    /// of the will must be checked separately via [`Self::will`].
    pub fn files_for_will(&self, will_id: &str, caller: &UserId) -> Vec<StoredFile> {
        self.file_order
            .iter()
            .filter_map(|id| self.files.get(id))
            .filter(|file| file.will_id == will_id && &file.user_id == caller)
            .cloned()
            .collect()
    }

    /// Remove a file record, returning it so the caller can unlink the blob.
    pub fn remove_file(&mut self, file_id: &str, caller: &UserId) -> Result<StoredFile, ApiError> {
        // Ownership check before removal keeps unowned records untouched.
        self.file(file_id, caller)?;
        self.file_order.retain(|id| id != file_id);
        self.files
            .remove(file_id)
            .ok_or_else(|| ApiError::not_found("File not found"))
    }
}
