//! Errors raised while loading or checking Lesson configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value did not deserialize.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section the current command needs is missing required fields.
    #[error("[{section}] is not configured: {hint}")]
    NotConfigured { section: String, hint: String },

    /// A field parsed but is outside its allowed range.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
