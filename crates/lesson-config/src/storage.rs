//! Lesson plan storage settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    ".lesson".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding `plans.jsonl`. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// The data directory, with a leading `~/` expanded to the home directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        match self.data_dir.strip_prefix("~/") {
            Some(rest) => dirs::home_dir().map_or_else(|| PathBuf::from(&self.data_dir), |home| home.join(rest)),
            None => PathBuf::from(&self.data_dir),
        }
    }
}
