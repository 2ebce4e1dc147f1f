//! The extract-then-validate pipeline.
//!
//! [`ResponseValidator`] is the single entry point between provider output
//! and the rest of the system. Each call is independent: the validator holds
//! only immutable configuration and compiled schemas, so one instance can be
//! shared across concurrent generations.
//!
//! Expected failures never panic or propagate as exceptions; they come back
//! as [`AppValidationError`]. Only `PARSE_ERROR` and `VALIDATION_ERROR` are
//! produced here.

use lesson_core::artifacts::{
    Artifact, ClassroomActivities, ConfusingPoints, ContentBreakdown, Dialogue,
    LearningLevelSuggestions, LearningObjectives, OnlineInteractiveQuiz, QuizDifficultyContent,
};
use lesson_core::enums::{ArtifactKind, Locale};
use lesson_core::{AppError, Provenance, RawContent};
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{
    AppValidationError, ErrorContext, FieldIssue, SchemaError, ValidationErrorKind,
};
use crate::extract::{self, ExtractionStrategy};
use crate::preview::{self, DEFAULT_PREVIEW_LEN};
use crate::registry::{self, SchemaRegistry};

/// Tunables for a [`ResponseValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Maximum characters of offending content kept in error context.
    pub preview_len: usize,
    pub extraction: ExtractionStrategy,
    /// Language of `user_message` on failures.
    pub locale: Locale,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            preview_len: DEFAULT_PREVIEW_LEN,
            extraction: ExtractionStrategy::default(),
            locale: Locale::default(),
        }
    }
}

/// Validates raw provider output into typed lesson artifacts.
pub struct ResponseValidator {
    registry: SchemaRegistry,
    options: ValidatorOptions,
}

impl ResponseValidator {
    #[must_use]
    pub const fn new(registry: SchemaRegistry, options: ValidatorOptions) -> Self {
        Self { registry, options }
    }

    /// Build a validator with a fresh registry and default options.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if the registry cannot be built.
    pub fn with_defaults() -> Result<Self, SchemaError> {
        Ok(Self::new(SchemaRegistry::new()?, ValidatorOptions::default()))
    }

    #[must_use]
    pub const fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Phase one: turn raw content into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns a `PARSE_ERROR` whose preview is taken from the original,
    /// uncleaned input.
    pub fn parse(
        &self,
        raw: &RawContent,
        prompt_type: &str,
        provenance: &Provenance,
    ) -> Result<Value, AppValidationError> {
        extract::extract_json(raw, self.options.extraction).map_err(|e| {
            let mut ctx = self.context(prompt_type, provenance);
            ctx.raw_output_preview = Some(preview::preview(&raw.to_text(), self.options.preview_len));
            let error = AppValidationError::new(
                ValidationErrorKind::ParseError,
                format!("{prompt_type}: response is not valid JSON: {e}"),
                ctx,
                self.options.locale,
            )
            .with_original_error(e);
            log_failure(&error);
            error
        })
    }

    /// Validate raw content as artifact `A`, returning the normalized value.
    ///
    /// # Errors
    ///
    /// Returns `PARSE_ERROR` if no JSON could be extracted, or
    /// `VALIDATION_ERROR` listing every violated field.
    pub fn validate<A: Artifact>(
        &self,
        raw: &RawContent,
        provenance: &Provenance,
    ) -> Result<A, AppValidationError> {
        let prompt_type = A::KIND.as_str();
        let value = self.parse(raw, prompt_type, provenance)?;

        if let Err(e) = self.registry.validate(A::KIND, &value) {
            return Err(self.schema_failure(prompt_type, provenance, &value, e));
        }
        self.finish(prompt_type, provenance, value)
    }

    /// Validate raw content as `kind` and return the normalized JSON.
    ///
    /// The returned value is the typed artifact re-serialized, so defaults
    /// such as empty `sentenceScramble` lists are present.
    ///
    /// # Errors
    ///
    /// Same as [`ResponseValidator::validate`].
    pub fn validate_kind(
        &self,
        kind: ArtifactKind,
        raw: &RawContent,
        provenance: &Provenance,
    ) -> Result<Value, AppValidationError> {
        match kind {
            ArtifactKind::LearningObjectives => self.normalized::<LearningObjectives>(raw, provenance),
            ArtifactKind::ContentBreakdown => self.normalized::<ContentBreakdown>(raw, provenance),
            ArtifactKind::ConfusingPoints => self.normalized::<ConfusingPoints>(raw, provenance),
            ArtifactKind::ClassroomActivities => {
                self.normalized::<ClassroomActivities>(raw, provenance)
            }
            ArtifactKind::LearningLevels => {
                self.normalized::<LearningLevelSuggestions>(raw, provenance)
            }
            ArtifactKind::QuizDifficulty => self.normalized::<QuizDifficultyContent>(raw, provenance),
            ArtifactKind::OnlineInteractiveQuiz => {
                self.normalized::<OnlineInteractiveQuiz>(raw, provenance)
            }
            ArtifactKind::Dialogue => self.normalized::<Dialogue>(raw, provenance),
        }
    }

    /// Validate raw content against an ad-hoc type's schema.
    ///
    /// The schema is generated and compiled per call; registered artifacts
    /// should go through [`ResponseValidator::validate`] instead.
    ///
    /// # Errors
    ///
    /// Same as [`ResponseValidator::validate`].
    pub fn validate_as<T: JsonSchema + DeserializeOwned>(
        &self,
        raw: &RawContent,
        prompt_type: &str,
        provenance: &Provenance,
    ) -> Result<T, AppValidationError> {
        let value = self.parse(raw, prompt_type, provenance)?;

        let checked = registry::type_schema::<T>()
            .and_then(|schema| registry::compile(&schema))
            .and_then(|validator| registry::check_with(&validator, &value));
        if let Err(e) = checked {
            return Err(self.schema_failure(prompt_type, provenance, &value, e));
        }
        self.finish(prompt_type, provenance, value)
    }

    /// [`ResponseValidator::validate`] for callers that propagate with `?`
    /// into [`AppError`].
    ///
    /// # Errors
    ///
    /// Returns the packaged `AppError` (`AI_PARSE_ERROR` or
    /// `AI_VALIDATION_ERROR`) wrapping the validation error as its cause.
    pub fn validate_or_raise<A: Artifact>(
        &self,
        raw: &RawContent,
        provenance: &Provenance,
    ) -> Result<A, AppError> {
        self.validate::<A>(raw, provenance).map_err(AppError::from)
    }

    /// [`ResponseValidator::validate_kind`] raising [`AppError`].
    ///
    /// # Errors
    ///
    /// See [`ResponseValidator::validate_or_raise`].
    pub fn validate_kind_or_raise(
        &self,
        kind: ArtifactKind,
        raw: &RawContent,
        provenance: &Provenance,
    ) -> Result<Value, AppError> {
        self.validate_kind(kind, raw, provenance)
            .map_err(AppError::from)
    }

    fn normalized<A: Artifact>(
        &self,
        raw: &RawContent,
        provenance: &Provenance,
    ) -> Result<Value, AppValidationError> {
        let artifact = self.validate::<A>(raw, provenance)?;
        to_normalized_value(&artifact).map_err(|e| {
            let error = AppValidationError::new(
                ValidationErrorKind::ValidationError,
                format!("{}: normalized output could not be serialized: {e}", A::KIND),
                self.context(A::KIND.as_str(), provenance),
                self.options.locale,
            )
            .with_original_error(e);
            log_failure(&error);
            error
        })
    }

    /// Deserialize a schema-checked value, applying serde defaults.
    fn finish<T: DeserializeOwned>(
        &self,
        prompt_type: &str,
        provenance: &Provenance,
        value: Value,
    ) -> Result<T, AppValidationError> {
        let preview_source = preview::preview_value(&value, self.options.preview_len);
        match serde_json::from_value::<T>(value) {
            Ok(data) => {
                tracing::debug!(
                    prompt_type,
                    provider = provenance.provider.as_deref().unwrap_or("unknown"),
                    model = provenance.model.as_deref().unwrap_or("unknown"),
                    "AI response validated"
                );
                Ok(data)
            }
            Err(e) => {
                let mut ctx = self.context(prompt_type, provenance);
                ctx.raw_output_preview = Some(preview_source);
                let error = AppValidationError::new(
                    ValidationErrorKind::ValidationError,
                    format!("{prompt_type}: response does not match the expected shape: {e}"),
                    ctx,
                    self.options.locale,
                )
                .with_issues(vec![FieldIssue {
                    path: "/".to_string(),
                    message: e.to_string(),
                }])
                .with_original_error(e);
                log_failure(&error);
                Err(error)
            }
        }
    }

    fn schema_failure(
        &self,
        prompt_type: &str,
        provenance: &Provenance,
        value: &Value,
        error: SchemaError,
    ) -> AppValidationError {
        let mut ctx = self.context(prompt_type, provenance);
        ctx.raw_output_preview = Some(preview::preview_value(value, self.options.preview_len));

        let (message, issues) = match error {
            SchemaError::ValidationFailed { issues } => (
                format!(
                    "{prompt_type}: response failed schema validation ({} issue{})",
                    issues.len(),
                    if issues.len() == 1 { "" } else { "s" }
                ),
                issues,
            ),
            other => (format!("{prompt_type}: schema unavailable: {other}"), Vec::new()),
        };

        let error = AppValidationError::new(
            ValidationErrorKind::ValidationError,
            message,
            ctx,
            self.options.locale,
        )
        .with_issues(issues);
        log_failure(&error);
        error
    }

    fn context(&self, prompt_type: &str, provenance: &Provenance) -> ErrorContext {
        ErrorContext {
            prompt_type: Some(prompt_type.to_string()),
            provider: provenance.provider.clone(),
            model: provenance.model.clone(),
            raw_output_preview: None,
        }
    }
}

fn to_normalized_value<T: Serialize>(value: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(value)
}

fn log_failure(error: &AppValidationError) {
    let ctx = &error.context;
    let issues: Vec<String> = error.issues.iter().map(ToString::to_string).collect();
    tracing::error!(
        kind = %error.kind,
        prompt_type = ctx.prompt_type.as_deref().unwrap_or("unknown"),
        provider = ctx.provider.as_deref().unwrap_or("unknown"),
        model = ctx.model.as_deref().unwrap_or("unknown"),
        preview = ctx.raw_output_preview.as_deref().unwrap_or(""),
        ?issues,
        original_error = error.original_error.as_deref().unwrap_or(""),
        "{}",
        error.message
    );
}
