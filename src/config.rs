// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values, and the
//! [`AppConfig`] loaded from the environment at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8001` |
//! | `SECRET_KEY` | HMAC secret for session tokens | `your-secret-key-here` |
//! | `USER_DATA_DIR` | Root directory for uploaded files | `user_data` |
//! | `LLM_API_KEY` | Credential for the assistance provider | Unset (gateway degrades) |
//! | `LLM_ENDPOINT` | OpenAI-compatible chat completions URL | `https://api.openai.com/v1/chat/completions` |
//! | `LLM_MODEL` | Model name sent to the provider | `gpt-4o-mini` |
//! | `RUST_LOG` | Log level filter | `info` |
//!
//! A missing `LLM_API_KEY` does not fail startup: the assistance gateway
//! answers with a fixed unavailability message instead.

use std::env;
use std::path::PathBuf;

/// Environment variable name for the session token signing secret.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Environment variable name for the upload storage root.
pub const USER_DATA_DIR_ENV: &str = "USER_DATA_DIR";

/// Environment variable name for the assistance provider credential.
pub const LLM_API_KEY_ENV: &str = "LLM_API_KEY";

/// Environment variable name for the assistance provider endpoint.
pub const LLM_ENDPOINT_ENV: &str = "LLM_ENDPOINT";

/// Environment variable name for the assistance provider model.
pub const LLM_MODEL_ENV: &str = "LLM_MODEL";

/// Default chat completions endpoint.
pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model for drafting assistance.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Default request timeout for the assistance provider, in seconds.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Session tokens expire this many hours after issue.
pub const ACCESS_TOKEN_EXPIRE_HOURS: i64 = 24;

/// Largest accepted upload body. Attachments include audio and video
/// recordings, so this is well above the framework default.
pub const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify session tokens.
    pub secret_key: String,
    /// Root directory of the per-user file vault.
    pub data_dir: PathBuf,
    /// Assistance provider settings.
    pub llm: LlmConfig,
}

/// Settings for the external text-generation provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Provider credential. `None` degrades the gateway gracefully.
    pub api_key: Option<String>,
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    /// Model name sent with every request.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl AppConfig {
    /// Load configuration from the environment, filling in defaults.
    pub fn from_env() -> Self {
        let secret_key =
            env::var(SECRET_KEY_ENV).unwrap_or_else(|_| "your-secret-key-here".to_string());
        let data_dir = env::var(USER_DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("user_data"));

        let api_key = env::var(LLM_API_KEY_ENV).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            tracing::warn!("{LLM_API_KEY_ENV} not set; drafting assistance is degraded");
        }

        Self {
            secret_key,
            data_dir,
            llm: LlmConfig {
                api_key,
                endpoint: env::var(LLM_ENDPOINT_ENV)
                    .unwrap_or_else(|_| DEFAULT_LLM_ENDPOINT.to_string()),
                model: env::var(LLM_MODEL_ENV).unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
                timeout_seconds: DEFAULT_LLM_TIMEOUT_SECS,
            },
        }
    }
}

#[cfg(test)]
impl AppConfig {
    /// Configuration for unit tests: fixed secret, no provider credential,
    /// vault rooted at the given directory.
    pub fn for_tests(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            secret_key: "test-secret".to_string(),
            data_dir: data_dir.into(),
            llm: LlmConfig {
                api_key: None,
                endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
                model: DEFAULT_LLM_MODEL.to_string(),
                timeout_seconds: 1,
            },
        }
    }
}
