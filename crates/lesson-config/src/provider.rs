//! AI provider settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Provider name for the OpenAI-compatible chat-completions backend.
pub const OPENAI_COMPAT: &str = "openai";
/// Provider name for the canned-response backend.
pub const STATIC: &str = "static";

fn default_name() -> String {
    OPENAI_COMPAT.to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_json_mode() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// `openai` (any chat-completions compatible endpoint) or `static`.
    #[serde(default = "default_name")]
    pub name: String,

    /// API root, without the trailing `/chat/completions`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for the API. Prefer `LESSON_PROVIDER__API_KEY` over a file.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Ask the backend for a JSON object response format.
    #[serde(default = "default_json_mode")]
    pub json_mode: bool,

    /// Directory of `<artifactKind>.json` responses for the `static` provider.
    #[serde(default)]
    pub fixtures_dir: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            base_url: default_base_url(),
            api_key: String::new(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            json_mode: default_json_mode(),
            fixtures_dir: String::new(),
        }
    }
}

impl ProviderConfig {
    /// Whether the selected backend has what it needs to make calls.
    pub fn is_configured(&self) -> bool {
        match self.name.as_str() {
            OPENAI_COMPAT => !self.api_key.is_empty() && !self.base_url.is_empty(),
            STATIC => !self.fixtures_dir.is_empty(),
            _ => false,
        }
    }

    /// Check the section before building a provider from it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an unknown provider name or a
    /// zero timeout, and `ConfigError::NotConfigured` when required fields
    /// for the selected backend are empty.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.name != OPENAI_COMPAT && self.name != STATIC {
            return Err(ConfigError::invalid(
                "provider.name",
                format!("expected '{OPENAI_COMPAT}' or '{STATIC}', got '{}'", self.name),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("provider.timeout_secs", "must be greater than 0"));
        }
        if !self.is_configured() {
            let hint = if self.name == STATIC {
                "set provider.fixtures_dir or LESSON_PROVIDER__FIXTURES_DIR"
            } else {
                "set LESSON_PROVIDER__API_KEY"
            };
            return Err(ConfigError::NotConfigured {
                section: "provider".to_string(),
                hint: hint.to_string(),
            });
        }
        Ok(())
    }
}
