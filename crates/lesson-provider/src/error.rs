//! Provider error types.

use std::path::PathBuf;

use lesson_core::enums::Locale;
use lesson_core::{AppError, ErrorCode};
use thiserror::Error;

/// Errors that can occur while asking a provider for content.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// No API key configured for a backend that needs one.
    #[error("no API key configured for provider '{provider}'")]
    MissingApiKey { provider: String },

    /// The call succeeded but carried no content.
    #[error("provider '{provider}' returned an empty response")]
    EmptyResponse { provider: String },

    /// The response envelope (not the content) could not be decoded.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// A canned response could not be read.
    #[error("fixture {path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configured provider name has no adapter.
    #[error("unsupported provider: {0}")]
    Unsupported(String),
}

impl ProviderError {
    /// The application error code this failure surfaces as.
    #[must_use]
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Http(e) if e.is_timeout() => ErrorCode::AiTimeout,
            Self::Http(e) if e.is_decode() => ErrorCode::AiProviderError,
            Self::Http(_) => ErrorCode::NetworkRequestFailed,
            Self::Api {
                status: 401 | 403, ..
            } => ErrorCode::AuthInvalidApiKey,
            Self::Api {
                status: 408 | 504, ..
            } => ErrorCode::NetworkTimeout,
            Self::Api { .. } | Self::Malformed(_) | Self::Fixture { .. } => {
                ErrorCode::AiProviderError
            }
            Self::RateLimited { .. } => ErrorCode::AiRateLimited,
            Self::MissingApiKey { .. } => ErrorCode::AuthMissingApiKey,
            Self::EmptyResponse { .. } => ErrorCode::AiEmptyResponse,
            Self::Unsupported(_) => ErrorCode::ValidationInvalidInput,
        }
    }

    /// Package as an [`AppError`] with localized text and recovery actions.
    #[must_use]
    pub fn into_app_error(self, locale: Locale) -> AppError {
        let code = self.error_code();
        let retry_after = match &self {
            Self::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        };
        let mut error = AppError::localized(code, self.to_string(), locale);
        if let Some(secs) = retry_after {
            error = error.with_context("retryAfterSecs", secs);
        }
        error.with_cause(self)
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        error.into_app_error(Locale::default())
    }
}
