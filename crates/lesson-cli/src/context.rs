use std::sync::Arc;

use lesson_config::{ConfigError, LessonConfig, OPENAI_COMPAT};
use lesson_core::enums::Locale;
use lesson_core::{AppError, ErrorCode};
use lesson_provider::Provider;
use lesson_schema::{ExtractionStrategy, ResponseValidator, SchemaRegistry};
use lesson_store::LessonPlanStore;

use crate::cli::GlobalFlags;

/// Long-lived services shared by command handlers.
///
/// The validator is built once up front; the provider and store are built
/// on demand so commands that do not need them work without provider
/// credentials or a writable data directory.
pub struct AppContext {
    pub config: LessonConfig,
    pub locale: Locale,
    pub validator: Arc<ResponseValidator>,
}

impl AppContext {
    pub fn init(config: LessonConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let locale = flags.locale.unwrap_or(config.general.locale);
        let registry = SchemaRegistry::new()?;
        let validator = ResponseValidator::new(registry, config.validation.validator_options(locale));
        Ok(Self {
            config,
            locale,
            validator: Arc::new(validator),
        })
    }

    /// The shared validator, or a fresh one using a different extraction
    /// strategy.
    pub fn validator_with(
        &self,
        extraction: Option<ExtractionStrategy>,
    ) -> anyhow::Result<Arc<ResponseValidator>> {
        match extraction {
            Some(strategy) if strategy != self.validator.options().extraction => {
                let mut options = *self.validator.options();
                options.extraction = strategy;
                Ok(Arc::new(ResponseValidator::new(SchemaRegistry::new()?, options)))
            }
            _ => Ok(Arc::clone(&self.validator)),
        }
    }

    /// Build the configured provider.
    pub fn provider(&self) -> Result<Arc<Provider>, AppError> {
        self.config
            .provider
            .check()
            .map_err(|e| self.config_error(e))?;
        let provider =
            Provider::from_config(&self.config.provider).map_err(|e| e.into_app_error(self.locale))?;
        Ok(Arc::new(provider))
    }

    /// Open the plan store under the configured data directory.
    pub fn store(&self) -> Result<LessonPlanStore, AppError> {
        LessonPlanStore::open(self.config.storage.data_dir()).map_err(|e| e.into_app_error(self.locale))
    }

    fn config_error(&self, error: ConfigError) -> AppError {
        let code = match &error {
            ConfigError::NotConfigured { .. } if self.config.provider.name == OPENAI_COMPAT => {
                ErrorCode::AuthMissingApiKey
            }
            _ => ErrorCode::ValidationInvalidInput,
        };
        AppError::localized(code, error.to_string(), self.locale).with_cause(error)
    }
}
