//! API key entity and save input
//!
//! Key material is generated server-side on create and only ever returned in
//! full once; listings expose the masked form.

use crate::error::{UniverseError, UniverseResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An API key issued to a tenant or to the platform itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Full key material; masked before leaving a listing flow
    pub key: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiKey {
    /// Replace the key material with its masked form
    pub fn masked(mut self) -> Self {
        self.key = mask_key(&self.key);
        self
    }
}

/// Input for creating or renaming an API key
///
/// The key material itself is never part of the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveApiKeyInput {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
}

impl SaveApiKeyInput {
    /// Validate the input shape before any side effect
    pub fn validate(&self) -> UniverseResult<()> {
        if self.name.trim().is_empty() {
            return Err(UniverseError::validation("key name must not be empty"));
        }
        Ok(())
    }
}

/// Mask key material for display: keep a short prefix and suffix
///
/// Counts characters, not bytes; keys are caller-supplied and may contain
/// multibyte text.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len());
    }
    let prefix: String = chars[..6].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_prefix_and_suffix() {
        let masked = mask_key("pu-0123456789abcdef");
        assert_eq!(masked, "pu-012...cdef");
    }

    #[test]
    fn test_mask_short_key_hides_everything() {
        assert_eq!(mask_key("short"), "*****");
    }

    #[test]
    fn test_mask_multibyte_key() {
        // A multibyte character straddling the prefix cut must not panic.
        assert_eq!(mask_key("aaaaaбbbbbbb"), "aaaaaб...bbbb");
        assert_eq!(mask_key("密钥密钥密钥密钥密钥密钥"), "密钥密钥密钥...密钥密钥");
    }
}
