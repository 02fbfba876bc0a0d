//! LLM fallback client.
//!
//! Speaks the OpenAI-style chat completions API. Invoked only for
//! queries the router returned as `Unhandled`; there is exactly one
//! request per query, no retries - retry policy belongs to whoever
//! hosts us.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use crate::config::LlmConfig;

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Client for the hosted fallback model.
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    system_prompt: String,
    api_key: String,
}

impl LlmClient {
    /// Build from config. Fails when the API key environment
    /// variable is unset.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).with_context(|| {
            format!(
                "LLM API key not found in environment variable {}",
                config.api_key_env
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            api_key,
        })
    }

    /// One fallback request: system prompt + the user's query.
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        info!(model = %self.model, "sending fallback query to LLM");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: self.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("failed to reach LLM backend")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("LLM request failed ({}): {}", status, text);
        }

        let chat: ChatResponse = resp
            .json()
            .await
            .context("failed to parse LLM response")?;

        let answer = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .unwrap_or_default();

        Ok(answer)
    }
}
