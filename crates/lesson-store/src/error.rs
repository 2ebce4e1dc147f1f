//! Storage error types.

use std::path::PathBuf;

use lesson_core::enums::Locale;
use lesson_core::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The plan log could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The plan log could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line in the plan log is not a valid record.
    #[error("{path}:{line}: invalid record: {message}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// No live plan has this id.
    #[error("lesson plan not found: {0}")]
    NotFound(String),

    /// The OS random source failed while minting an id.
    #[error("failed to generate id: {0}")]
    IdGeneration(String),
}

impl StoreError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } | Self::Corrupt { .. } => ErrorCode::StorageReadFailed,
            Self::Write { .. } | Self::IdGeneration(_) => ErrorCode::StorageWriteFailed,
            Self::NotFound(_) => ErrorCode::StorageNotFound,
        }
    }

    /// Package as an [`AppError`] with localized text and recovery actions.
    #[must_use]
    pub fn into_app_error(self, locale: Locale) -> AppError {
        let code = self.error_code();
        let error = AppError::localized(code, self.to_string(), locale);
        match &self {
            Self::NotFound(id) => {
                let id = id.clone();
                error.with_context("id", id).with_cause(self)
            }
            _ => error.with_cause(self),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        error.into_app_error(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_follow_operation() {
        let read = StoreError::Corrupt {
            path: "plans.jsonl".into(),
            line: 3,
            message: "expected value".into(),
        };
        assert_eq!(read.error_code(), ErrorCode::StorageReadFailed);
        assert_eq!(read.to_string(), "plans.jsonl:3: invalid record: expected value");

        let missing: AppError = StoreError::NotFound("lpn-00000000".into()).into();
        assert_eq!(missing.code, ErrorCode::StorageNotFound);
        assert_eq!(missing.context["id"], "lpn-00000000");
        assert!(missing.is_storage_error());
    }
}
