//! Platform configuration
//!
//! Covers the generation-API transport and execution defaults. Values come
//! from a TOML file, from the environment, or from builder-style setters;
//! the credential falls back to `UNIVERSE_API_KEY` when unset.

use crate::error::{UniverseError, UniverseResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV_VAR: &str = "UNIVERSE_API_KEY";

/// Top-level configuration for the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseConfig {
    /// Chat-completions base URL
    #[serde(default = "UniverseConfig::default_base_url")]
    pub base_url: String,
    /// API credential; environment fallback applies when absent
    #[serde(default)]
    pub api_key: Option<String>,
    /// Temperature applied when neither caller nor connection supplies one
    #[serde(default = "UniverseConfig::default_temperature")]
    pub default_temperature: f32,
    /// End-to-end timeout for a single generation call, in seconds
    #[serde(default = "UniverseConfig::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl UniverseConfig {
    fn default_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }

    const fn default_temperature() -> f32 {
        0.7
    }

    const fn default_request_timeout_secs() -> u64 {
        60
    }

    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> UniverseResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(raw: &str) -> UniverseResult<Self> {
        toml::from_str(raw).map_err(|e| UniverseError::config(format!("invalid config: {e}")))
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default temperature
    pub fn with_default_temperature(mut self, temperature: f32) -> Self {
        self.default_temperature = temperature;
        self
    }

    /// Set the request timeout in seconds
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Resolve the API key: configured value first, then the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            api_key: None,
            default_temperature: Self::default_temperature(),
            request_timeout_secs: Self::default_request_timeout_secs(),
        }
    }
}
