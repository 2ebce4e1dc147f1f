//! Cross-cutting error taxonomy for Lesson.
//!
//! Every failure that reaches a user is an [`AppError`]: a machine-readable
//! [`ErrorCode`], a developer message, a localized user message, optional
//! recovery actions, an optional chained cause, and a free-form context map.
//! Domain-specific errors (`ProviderError`, `StoreError`, ...) live in their
//! own crates and convert into `AppError` at the boundary.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Locale;
use crate::messages;

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Fixed enumeration of application error codes.
///
/// The string form is `FAMILY_DETAIL`; family helpers such as
/// [`ErrorCode::is_ai_error`] branch on the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    AiParseError,
    AiValidationError,
    AiProviderError,
    AiRateLimited,
    AiEmptyResponse,
    AiTimeout,
    StorageReadFailed,
    StorageWriteFailed,
    StorageNotFound,
    NetworkRequestFailed,
    NetworkTimeout,
    AuthMissingApiKey,
    AuthInvalidApiKey,
    ShareLinkInvalid,
    ShareLinkExpired,
    ValidationInvalidInput,
    #[serde(rename = "UNKNOWN_ERROR")]
    Unknown,
}

impl ErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiParseError => "AI_PARSE_ERROR",
            Self::AiValidationError => "AI_VALIDATION_ERROR",
            Self::AiProviderError => "AI_PROVIDER_ERROR",
            Self::AiRateLimited => "AI_RATE_LIMITED",
            Self::AiEmptyResponse => "AI_EMPTY_RESPONSE",
            Self::AiTimeout => "AI_TIMEOUT",
            Self::StorageReadFailed => "STORAGE_READ_FAILED",
            Self::StorageWriteFailed => "STORAGE_WRITE_FAILED",
            Self::StorageNotFound => "STORAGE_NOT_FOUND",
            Self::NetworkRequestFailed => "NETWORK_REQUEST_FAILED",
            Self::NetworkTimeout => "NETWORK_TIMEOUT",
            Self::AuthMissingApiKey => "AUTH_MISSING_API_KEY",
            Self::AuthInvalidApiKey => "AUTH_INVALID_API_KEY",
            Self::ShareLinkInvalid => "SHARE_LINK_INVALID",
            Self::ShareLinkExpired => "SHARE_LINK_EXPIRED",
            Self::ValidationInvalidInput => "VALIDATION_INVALID_INPUT",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    #[must_use]
    pub fn is_ai_error(self) -> bool {
        self.as_str().starts_with("AI_")
    }

    #[must_use]
    pub fn is_network_error(self) -> bool {
        self.as_str().starts_with("NETWORK_")
    }

    #[must_use]
    pub fn is_auth_error(self) -> bool {
        self.as_str().starts_with("AUTH_")
    }

    #[must_use]
    pub fn is_storage_error(self) -> bool {
        self.as_str().starts_with("STORAGE_")
    }

    #[must_use]
    pub fn is_share_error(self) -> bool {
        self.as_str().starts_with("SHARE_")
    }

    #[must_use]
    pub fn is_validation_error(self) -> bool {
        self.as_str().starts_with("VALIDATION_")
    }

    /// Recovery actions offered by default for this code.
    #[must_use]
    pub fn default_actions(self, locale: Locale) -> Vec<RecoveryAction> {
        let kinds: &[(RecoveryKind, ActionStyle)] = match self {
            Self::AiParseError | Self::AiValidationError | Self::AiEmptyResponse => {
                &[(RecoveryKind::Retry, ActionStyle::Primary)]
            }
            Self::AiProviderError | Self::AiTimeout | Self::AiRateLimited => &[
                (RecoveryKind::Retry, ActionStyle::Primary),
                (RecoveryKind::SwitchProvider, ActionStyle::Secondary),
            ],
            Self::NetworkRequestFailed | Self::NetworkTimeout | Self::StorageReadFailed => {
                &[(RecoveryKind::Retry, ActionStyle::Primary)]
            }
            Self::AuthMissingApiKey | Self::AuthInvalidApiKey => {
                &[(RecoveryKind::Reconfigure, ActionStyle::Primary)]
            }
            Self::StorageWriteFailed => &[
                (RecoveryKind::Retry, ActionStyle::Primary),
                (RecoveryKind::Dismiss, ActionStyle::Danger),
            ],
            Self::StorageNotFound
            | Self::ShareLinkInvalid
            | Self::ShareLinkExpired
            | Self::ValidationInvalidInput => &[(RecoveryKind::Dismiss, ActionStyle::Secondary)],
            Self::Unknown => &[
                (RecoveryKind::Retry, ActionStyle::Primary),
                (RecoveryKind::ContactSupport, ActionStyle::Secondary),
            ],
        };
        kinds
            .iter()
            .map(|(kind, style)| RecoveryAction::new(*kind, *style, locale))
            .collect()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Recovery actions
// ---------------------------------------------------------------------------

/// What the caller should do when the user picks a recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryKind {
    Retry,
    SwitchProvider,
    Reconfigure,
    Dismiss,
    ContactSupport,
}

/// Presentation hint for a recovery action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    Primary,
    Secondary,
    Danger,
}

/// A user-selectable recovery action attached to an [`AppError`].
///
/// The action is data: the caller maps `kind` to its own handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecoveryAction {
    pub label: String,
    pub kind: RecoveryKind,
    pub style: ActionStyle,
}

impl RecoveryAction {
    #[must_use]
    pub fn new(kind: RecoveryKind, style: ActionStyle, locale: Locale) -> Self {
        Self {
            label: messages::action_label(kind, locale).to_string(),
            kind,
            style,
        }
    }
}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// The application-wide error type.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct AppError {
    pub code: ErrorCode,
    /// Developer-facing message.
    pub message: String,
    /// Localized, non-technical message suitable for direct display.
    pub user_message: String,
    pub actions: Vec<RecoveryAction>,
    #[source]
    pub cause: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    pub context: BTreeMap<String, serde_json::Value>,
}

impl AppError {
    /// Build an error with an explicit user message and no actions.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>, user_message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            user_message: user_message.into(),
            actions: Vec::new(),
            cause: None,
            context: BTreeMap::new(),
        }
    }

    /// Build an error whose user message and actions come from the
    /// localized table for `code`.
    #[must_use]
    pub fn localized(code: ErrorCode, message: impl Into<String>, locale: Locale) -> Self {
        let mut error = Self::new(code, message, messages::user_message(code, locale));
        error.actions = code.default_actions(locale);
        error
    }

    #[must_use]
    pub fn with_cause(
        mut self,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.cause = Some(cause.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: RecoveryAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Coerce any error into an `AppError`.
    ///
    /// An `AppError` (possibly wrapped in `anyhow`) passes through unchanged.
    /// Anything else becomes `UNKNOWN_ERROR`, keeping its message and
    /// chaining the original as `cause`.
    #[must_use]
    pub fn coerce(error: impl Into<anyhow::Error>, locale: Locale) -> Self {
        let error: anyhow::Error = error.into();
        match error.downcast::<Self>() {
            Ok(app) => app,
            Err(other) => {
                let message = format!("{other:#}");
                Self::localized(ErrorCode::Unknown, message, locale).with_cause(other)
            }
        }
    }

    /// Build an `AppError` from a value that is not an error at all, such as
    /// a panic payload. Falls back to the stock unknown-error message; string
    /// payloads are preserved in the context for diagnostics.
    #[must_use]
    pub fn from_opaque(payload: &(dyn Any + Send), locale: Locale) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned());

        let error = Self::localized(ErrorCode::Unknown, "unexpected non-error failure", locale);
        match detail {
            Some(detail) => error.with_context("payload", detail),
            None => error,
        }
    }

    #[must_use]
    pub fn is_ai_error(&self) -> bool {
        self.code.is_ai_error()
    }

    #[must_use]
    pub fn is_network_error(&self) -> bool {
        self.code.is_network_error()
    }

    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        self.code.is_auth_error()
    }

    #[must_use]
    pub fn is_storage_error(&self) -> bool {
        self.code.is_storage_error()
    }

    /// Serializable snapshot of this error, cause flattened to a string.
    #[must_use]
    pub fn to_report(&self) -> AppErrorReport {
        AppErrorReport {
            code: self.code,
            message: self.message.clone(),
            user_message: self.user_message.clone(),
            actions: self.actions.clone(),
            cause: self.cause.as_ref().map(ToString::to_string),
            context: self.context.clone(),
        }
    }
}

/// JSON-friendly view of an [`AppError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppErrorReport {
    pub code: ErrorCode,
    pub message: String,
    pub user_message: String,
    pub actions: Vec<RecoveryAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub context: BTreeMap<String, serde_json::Value>,
}
