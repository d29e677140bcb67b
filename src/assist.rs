// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Assistance gateway: pass-through to an OpenAI-compatible chat
//! completions API for will-drafting help.
//!
//! This is the one boundary where failures are swallowed on purpose.
//! Missing credential, network error, provider error, and malformed
//! responses all become a fixed user-facing message instead of an HTTP
//! error, so a provider outage never breaks will creation.

use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::models::Language;

/// Reply when the provider call fails.
pub const UNAVAILABLE_MESSAGE: &str =
    "AI assistance is currently unavailable. Please try again later.";

/// Reply when no provider credential is configured.
pub const NO_CREDENTIAL_MESSAGE: &str =
    "AI assistance is currently unavailable. Please contact support.";

const ENGLISH_PROMPT: &str = "You are a legal assistant specializing in will writing. \
    Provide clear, helpful advice for creating wills. Always remind users to consult \
    with a qualified attorney for final legal advice.";

const HINDI_PROMPT: &str = "आप वसीयत लेखन में विशेषज्ञ एक कानूनी सहायक हैं। वसीयत बनाने के लिए स्पष्ट, \
    सहायक सलाह प्रदान करें। हमेशा उपयोगकर्ताओं को अंतिम कानूनी सलाह के लिए एक योग्य वकील से सलाह लेने की याद दिलाएं।";

const TELUGU_PROMPT: &str = "మీరు వీలునామా రాయడంలో ప్రత్యేకత కలిగిన న్యాయ సహాయకుడు. వీలునామాలు \
    రూపొందించడానికి స్పష్టమైన, సహాయకరమైన సలహా అందించండి. చివరి న్యాయ సలహా కోసం అర్హత కలిగిన \
    న్యాయవాదిని సంప్రదించాలని వినియోగదారులకు ఎల్లప్పుడూ గుర్తు చేయండి.";

#[derive(Debug, thiserror::Error)]
enum AssistError {
    #[error("no provider credential configured")]
    MissingCredential,
    #[error("provider request failed: {0}")]
    Http(String),
    #[error("provider returned an error: {0}")]
    Api(String),
    #[error("unexpected provider response: {0}")]
    Parse(String),
}

/// Client for the external text-generation provider.
#[derive(Debug)]
pub struct AssistClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl AssistClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    /// Answer a drafting query. Never fails; any provider problem comes
    /// back as a fixed unavailability message.
    pub async fn assist(&self, query: &str, language: &str, context: &str) -> String {
        let system = system_prompt(language);
        let user = build_user_prompt(query, context);

        match self.request_completion(system, &user).await {
            Ok(text) => text,
            Err(AssistError::MissingCredential) => {
                warn!("assistance requested without a provider credential");
                NO_CREDENTIAL_MESSAGE.to_string()
            }
            Err(err) => {
                warn!(error = %err, "assistance provider call failed");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    /// Suggestion text for will create/update with the `ai_assisted` flag.
    pub async fn improve_content(&self, content: &str, language: Language) -> String {
        let query = format!("Help me improve this will content: {content}");
        self.assist(&query, language.as_tag(), "").await
    }

    async fn request_completion(&self, system: &str, user: &str) -> Result<String, AssistError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistError::MissingCredential)?;

        let request_body = json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": system,
                },
                {
                    "role": "user",
                    "content": user,
                }
            ]
        });

        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "sending assistance request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AssistError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AssistError::Api(format!("HTTP {status}: {body}")));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AssistError::Parse(e.to_string()))?;

        // Chat completions response format: choices[0].message.content.
        response_json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(str::to_string)
            .ok_or_else(|| AssistError::Parse(format!("unexpected response format: {response_json}")))
    }
}

/// Select the system prompt for a language tag. Unknown tags fall back
/// to english.
fn system_prompt(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "hindi" => HINDI_PROMPT,
        "telugu" => TELUGU_PROMPT,
        _ => ENGLISH_PROMPT,
    }
}

/// Prefix non-empty will context onto the query.
fn build_user_prompt(query: &str, context: &str) -> String {
    if context.is_empty() {
        query.to_string()
    } else {
        format!("Context: {context}\n\nQuery: {query}")
    }
}
