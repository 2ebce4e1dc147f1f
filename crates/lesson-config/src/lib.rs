//! # lesson-config
//!
//! Layered configuration loading for Lesson using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LESSON_*` prefix, `__` as separator)
//! 2. Project-level `.lesson/config.toml`
//! 3. User-level `~/.config/lesson/config.toml`
//! 4. Built-in defaults
//!
//! `LESSON_PROVIDER__API_KEY` maps to `provider.api_key`,
//! `LESSON_VALIDATION__EXTRACTION` to `validation.extraction`, and so on.
//!
//! ```no_run
//! use lesson_config::LessonConfig;
//!
//! let config = LessonConfig::load_with_dotenv().expect("config");
//! if config.provider.is_configured() {
//!     println!("model: {}", config.provider.model);
//! }
//! ```

mod error;
mod general;
mod provider;
mod storage;
mod validation;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use provider::{OPENAI_COMPAT, ProviderConfig, STATIC};
pub use storage::StorageConfig;
pub use validation::{MIN_PREVIEW_LEN, ValidationConfig};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "LESSON_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LessonConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LessonConfig {
    /// Load configuration from TOML files and environment variables, then
    /// check the always-required sections.
    ///
    /// Does not read `.env`; use [`LessonConfig::load_with_dotenv`] for that.
    /// The provider section is only checked when a command needs it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` for unreadable sources or mistyped
    /// values, and `ConfigError::InvalidValue` for out-of-range settings.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` into the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`LessonConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and check a config from any figment, so callers and tests can
    /// layer their own providers.
    ///
    /// # Errors
    ///
    /// Same as [`LessonConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validation.check()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Self::project_config_path();
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `~/.config/lesson/config.toml` (platform equivalent elsewhere).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lesson").join("config.toml"))
    }

    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".lesson").join("config.toml")
    }

    /// Read `.env` from the current directory or its parents, if any.
    fn load_dotenv() {
        match dotenvy::dotenv() {
            Err(e) if !e.not_found() => eprintln!("warning: ignoring unreadable .env: {e}"),
            _ => {}
        }
    }
}
