// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::assist::AssistClient;
use crate::config::AppConfig;
use crate::store::InMemoryStore;
use crate::vault::FileVault;

/// Shared application state, cheap to clone per request.
///
/// The store lock serializes individual operations only; there is no
/// cross-request transaction, so two concurrent updates to the same will
/// remain last-write-wins.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub config: Arc<AppConfig>,
    pub vault: Arc<FileVault>,
    pub assist: Arc<AssistClient>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let vault = FileVault::new(&config.data_dir);
        let assist = AssistClient::new(config.llm.clone());
        Self {
            store: Arc::new(RwLock::new(InMemoryStore::new())),
            config: Arc::new(config),
            vault: Arc::new(vault),
            assist: Arc::new(assist),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State with a test secret, no provider credential, and the vault
    /// rooted at the given directory.
    pub fn for_tests(data_dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(AppConfig::for_tests(data_dir))
    }
}
