// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-user file vault.
//!
//! Layout on disk:
//!
//! ```text
//! <root>/<user_id>/audio/
//! <root>/<user_id>/video/
//! <root>/<user_id>/documents/
//! ```
//!
//! Blobs are named by a generated UUID plus the original extension; the
//! caller-supplied filename never reaches the filesystem, which rules out
//! path traversal and name collisions.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use crate::models::{FileCategory, UserId};

#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("vault I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Handle to the upload storage tree.
#[derive(Debug, Clone)]
pub struct FileVault {
    root: PathBuf,
}

impl FileVault {
    /// Create a vault rooted at the given directory (custom roots are used
    /// in tests).
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the vault.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one user's files.
    pub fn user_dir(&self, user_id: &UserId) -> PathBuf {
        self.root.join(&user_id.0)
    }

    /// Category subdirectory inside a user's directory.
    pub fn category_dir(&self, user_id: &UserId, category: FileCategory) -> PathBuf {
        self.user_dir(user_id).join(category.dir_name())
    }

    /// Create the user's directory tree with all category subdirectories.
    /// Idempotent; called on signup and again before every upload.
    pub async fn provision_user(&self, user_id: &UserId) -> Result<(), VaultError> {
        for category in [
            FileCategory::Audio,
            FileCategory::Video,
            FileCategory::Documents,
        ] {
            fs::create_dir_all(self.category_dir(user_id, category)).await?;
        }
        Ok(())
    }

    /// Generate a collision-resistant on-disk name, keeping only the
    /// original extension.
    pub fn stored_name(original_filename: &str) -> String {
        match Path::new(original_filename)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        }
    }

    /// Write a blob into the user's category directory and return its path
    /// and on-disk size.
    pub async fn save(
        &self,
        user_id: &UserId,
        category: FileCategory,
        stored_name: &str,
        bytes: &[u8],
    ) -> Result<(PathBuf, u64), VaultError> {
        let dir = self.category_dir(user_id, category);
        fs::create_dir_all(&dir).await?;

        let path = dir.join(stored_name);
        fs::write(&path, bytes).await?;
        let size = fs::metadata(&path).await?.len();
        Ok((path, size))
    }

    /// Read a blob back in full.
    pub async fn read(&self, path: &Path) -> Result<Vec<u8>, VaultError> {
        Ok(fs::read(path).await?)
    }

    /// Remove a blob. An already-missing blob is not an error so record
    /// deletion can still proceed.
    pub async fn remove(&self, path: &Path) -> Result<(), VaultError> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
