//! Schema and validation error types.

use std::fmt;

use lesson_core::enums::Locale;
use lesson_core::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed: {issues:?}")]
    ValidationFailed {
        /// Every violated path, in validator order.
        issues: Vec<FieldIssue>,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

/// One violated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// JSON pointer to the offending value (`/` for the document root).
    pub path: String,
    pub message: String,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// The pipeline's error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationErrorKind {
    /// Input was not extractable or parseable JSON.
    ParseError,
    /// Input parsed but violated the artifact's structural contract.
    ValidationError,
    /// Catch-all for wrapping unexpected failures outside the pipeline.
    UnknownError,
}

impl ValidationErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParseError => "PARSE_ERROR",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// The application error code this kind surfaces as.
    #[must_use]
    pub const fn error_code(self) -> ErrorCode {
        match self {
            Self::ParseError => ErrorCode::AiParseError,
            Self::ValidationError => ErrorCode::AiValidationError,
            Self::UnknownError => ErrorCode::Unknown,
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic context attached to every validation failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_output_preview: Option<String>,
}

/// A failed validation, ready to log, display, or convert into [`AppError`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
#[serde(rename_all = "camelCase")]
pub struct AppValidationError {
    #[serde(rename = "type")]
    pub kind: ValidationErrorKind,
    /// Developer-facing message.
    pub message: String,
    /// Localized message suitable for direct display.
    pub user_message: String,
    pub context: ErrorContext,
    /// Field-path diagnostics; empty for parse errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<FieldIssue>,
    /// Display form of the underlying parser or deserializer error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_error: Option<String>,
    #[serde(skip)]
    pub locale: Locale,
}

impl AppValidationError {
    #[must_use]
    pub fn new(
        kind: ValidationErrorKind,
        message: impl Into<String>,
        context: ErrorContext,
        locale: Locale,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            user_message: lesson_core::messages::user_message(kind.error_code(), locale)
                .to_string(),
            context,
            issues: Vec::new(),
            original_error: None,
            locale,
        }
    }

    #[must_use]
    pub fn with_issues(mut self, issues: Vec<FieldIssue>) -> Self {
        self.issues = issues;
        self
    }

    #[must_use]
    pub fn with_original_error(mut self, error: impl fmt::Display) -> Self {
        self.original_error = Some(error.to_string());
        self
    }

    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::ParseError)
    }

    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::ValidationError)
    }
}

impl From<AppValidationError> for AppError {
    fn from(error: AppValidationError) -> Self {
        let code = error.kind.error_code();
        let mut app = Self::new(code, error.message.clone(), error.user_message.clone());
        app.actions = code.default_actions(error.locale);

        let ctx = &error.context;
        let fields = [
            ("promptType", &ctx.prompt_type),
            ("provider", &ctx.provider),
            ("model", &ctx.model),
            ("rawOutputPreview", &ctx.raw_output_preview),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                app.context.insert(key.to_string(), value.clone().into());
            }
        }
        if !error.issues.is_empty() {
            let issues = error
                .issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            app.context.insert("issues".to_string(), issues.into());
        }

        app.with_cause(error)
    }
}

/// Serializable `{success, data}` / `{success, error}` view of a pipeline
/// result, as printed by `lsn validate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AppValidationError>,
}

impl From<Result<serde_json::Value, AppValidationError>> for ValidationReport {
    fn from(result: Result<serde_json::Value, AppValidationError>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Self {
                success: false,
                data: None,
                error: Some(error),
            },
        }
    }
}
