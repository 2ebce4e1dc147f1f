//! General application settings.

use lesson_core::enums::Locale;
use serde::{Deserialize, Serialize};

const fn default_list_limit() -> u32 {
    20
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Language for user-facing error messages (`en` or `zh-TW`).
    #[serde(default)]
    pub locale: Locale,

    /// Default page size for `lsn plan list`.
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            list_limit: default_list_limit(),
        }
    }
}
