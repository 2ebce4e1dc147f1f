//! # lesson-provider
//!
//! Provider call adapters for Lesson.
//!
//! A provider turns a [`GenerationRequest`] into [`RawContent`]: untrusted
//! text (or an already-parsed JSON value) that still has to go through the
//! validation pipeline. Providers never validate.
//!
//! - [`OpenAiCompatProvider`]: any `/chat/completions` endpoint over HTTP
//! - [`StaticProvider`]: canned responses from memory or a fixtures directory
//! - [`Provider`]: runtime selection between the two from configuration

mod error;
mod fixture;
mod http;
mod openai;
mod prompt;

pub use error::ProviderError;
pub use fixture::StaticProvider;
pub use openai::OpenAiCompatProvider;
pub use prompt::{GenerationRequest, PromptBuilder};

use std::future::Future;

use lesson_config::{OPENAI_COMPAT, ProviderConfig, STATIC};
use lesson_core::{Provenance, RawContent};

/// Something that can be asked for lesson content.
pub trait ContentProvider: Send + Sync {
    /// Backend name reported in validation diagnostics.
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    /// Diagnostics record for content produced by this provider.
    fn provenance(&self) -> Provenance {
        Provenance::new(self.name(), self.model())
    }

    /// Perform one generation call.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<RawContent, ProviderError>> + Send;
}

/// The configured provider.
pub enum Provider {
    OpenAi(OpenAiCompatProvider),
    Static(StaticProvider),
}

impl Provider {
    /// Build the provider named in the `[provider]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unsupported`] for an unknown name, or the
    /// adapter's construction error.
    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        match config.name.as_str() {
            OPENAI_COMPAT => Ok(Self::OpenAi(OpenAiCompatProvider::new(config)?)),
            STATIC => Ok(Self::Static(StaticProvider::from_dir(&config.fixtures_dir))),
            other => Err(ProviderError::Unsupported(other.to_string())),
        }
    }
}

impl ContentProvider for Provider {
    fn name(&self) -> &str {
        match self {
            Self::OpenAi(p) => p.name(),
            Self::Static(p) => p.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            Self::OpenAi(p) => p.model(),
            Self::Static(p) => p.model(),
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<RawContent, ProviderError> {
        match self {
            Self::OpenAi(p) => p.generate(request).await,
            Self::Static(p) => p.generate(request).await,
        }
    }
}
