//! Configuration for lilyctl.
//!
//! Loads settings from a TOML file or uses defaults. The LLM API key
//! is never stored in the file; only the name of the environment
//! variable holding it is.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use lily_core::RouterConfig;

/// Default config file path.
pub const CONFIG_PATH: &str = "/etc/lily/config.toml";

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// CSV file holding the product rows.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "cleaned_output.csv".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// LLM fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// OpenAI-style chat completions base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for fallback answers.
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// System prompt sent with every fallback request.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "mixtral-8x7b".to_string()
}

fn default_api_key_env() -> String {
    "LILY_API_KEY".to_string()
}

fn default_system_prompt() -> String {
    "You are an AI shopping assistant.".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            system_prompt: default_system_prompt(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Top-level config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LilyConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub llm: LlmConfig,
}

impl LilyConfig {
    /// Load from `path`, falling back to defaults when the file is
    /// absent. A file that exists but does not parse is an error,
    /// not a silent fallback.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        if config.router.threshold > 100 {
            warn!(
                threshold = config.router.threshold,
                "fuzzy threshold above 100 accepts nothing"
            );
        }

        info!(path = %path.display(), "config loaded");
        Ok(config)
    }
}
