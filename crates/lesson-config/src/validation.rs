//! Validation pipeline settings.

use lesson_core::enums::Locale;
use lesson_schema::{ExtractionStrategy, ValidatorOptions, preview::DEFAULT_PREVIEW_LEN};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Smallest preview bound that still leaves room for content after the ellipsis.
pub const MIN_PREVIEW_LEN: usize = 16;

const fn default_preview_len() -> usize {
    DEFAULT_PREVIEW_LEN
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Characters of offending output kept in error context and logs.
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,

    /// `first_last` (default) or `balanced`.
    #[serde(default)]
    pub extraction: ExtractionStrategy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            preview_len: default_preview_len(),
            extraction: ExtractionStrategy::default(),
        }
    }
}

impl ValidationConfig {
    /// Reject values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `preview_len` is below
    /// [`MIN_PREVIEW_LEN`].
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.preview_len < MIN_PREVIEW_LEN {
            return Err(ConfigError::invalid(
                "validation.preview_len",
                format!("must be at least {MIN_PREVIEW_LEN}, got {}", self.preview_len),
            ));
        }
        Ok(())
    }

    /// Options for a `ResponseValidator` built from this section.
    #[must_use]
    pub const fn validator_options(&self, locale: Locale) -> ValidatorOptions {
        ValidatorOptions {
            preview_len: self.preview_len,
            extraction: self.extraction,
            locale,
        }
    }
}
