//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` so the working directory and environment are sandboxed.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lesson_config::{ConfigError, LessonConfig};
use lesson_core::enums::Locale;
use lesson_schema::ExtractionStrategy;
use pretty_assertions::assert_eq;

fn isolate_user_config(jail: &mut Jail) {
    let dir = jail.directory().join("xdg");
    jail.set_env("XDG_CONFIG_HOME", dir.display());
}

#[test]
fn loads_every_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[validation]
preview_len = 120
extraction = "balanced"

[provider]
name = "openai"
base_url = "http://localhost:11434/v1"
api_key = "sk-local"
model = "llama3.1"
timeout_secs = 15
json_mode = false

[storage]
data_dir = "/tmp/lessons"

[general]
locale = "zh-TW"
list_limit = 5
"#,
        )?;

        let config: LessonConfig = Figment::from(Serialized::defaults(LessonConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.validation.preview_len, 120);
        assert_eq!(config.validation.extraction, ExtractionStrategy::Balanced);
        assert_eq!(config.provider.base_url, "http://localhost:11434/v1");
        assert_eq!(config.provider.model, "llama3.1");
        assert_eq!(config.provider.timeout_secs, 15);
        assert!(!config.provider.json_mode);
        assert!(config.provider.is_configured());
        assert_eq!(config.storage.data_dir, "/tmp/lessons");
        assert_eq!(config.general.locale, Locale::ZhTw);
        assert_eq!(config.general.list_limit, 5);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[provider]
model = "gpt-4o"
"#,
        )?;

        let config: LessonConfig = Figment::from(Serialized::defaults(LessonConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.provider.model, "gpt-4o");
        assert_eq!(config.provider.base_url, "https://api.openai.com/v1");
        assert_eq!(config.provider.timeout_secs, 60);
        assert_eq!(config.validation.preview_len, 200);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[provider]
model = "from-toml"
"#,
        )?;
        jail.set_env("LESSON_PROVIDER__MODEL", "from-env");

        let config: LessonConfig = Figment::from(Serialized::defaults(LessonConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LESSON_").split("__"))
            .extract()?;

        assert_eq!(config.provider.model, "from-env");
        Ok(())
    });
}

#[test]
fn load_reads_project_config() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".lesson")).expect("project dir");
        jail.create_file(
            ".lesson/config.toml",
            r#"
[validation]
extraction = "balanced"
"#,
        )?;

        let config = LessonConfig::load().expect("config loads");
        assert_eq!(config.validation.extraction, ExtractionStrategy::Balanced);
        Ok(())
    });
}

#[test]
fn project_config_overrides_user_config() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join("xdg/lesson")).expect("xdg dir");
        jail.create_file(
            "xdg/lesson/config.toml",
            r#"
[provider]
model = "user-model"
api_key = "sk-user"
"#,
        )?;
        std::fs::create_dir_all(jail.directory().join(".lesson")).expect("project dir");
        jail.create_file(
            ".lesson/config.toml",
            r#"
[provider]
model = "project-model"
"#,
        )?;

        let config = LessonConfig::load().expect("config loads");
        assert_eq!(config.provider.model, "project-model");
        assert_eq!(config.provider.api_key, "sk-user");
        Ok(())
    });
}

#[test]
fn out_of_range_preview_len_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("LESSON_VALIDATION__PREVIEW_LEN", "4");

        let err = LessonConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err}");
        Ok(())
    });
}

#[test]
fn unknown_extraction_strategy_fails_to_extract() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.set_env("LESSON_VALIDATION__EXTRACTION", "greedy");

        let err = LessonConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "{err}");
        Ok(())
    });
}
