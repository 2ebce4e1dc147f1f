//! Raw provider output as handed to the validation pipeline.

use serde_json::Value;

/// Untrusted content returned by a provider call.
///
/// Some providers return a text completion that may or may not be bare JSON;
/// others (JSON mode, tool calls) hand back an already-parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawContent {
    Text(String),
    Parsed(Value),
}

impl RawContent {
    /// The content as text, for previews and logging.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Parsed(value) => value.to_string(),
        }
    }

    /// Whether the content carries nothing usable.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Parsed(value) => value.is_null(),
        }
    }
}

impl From<String> for RawContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for RawContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Value> for RawContent {
    fn from(value: Value) -> Self {
        Self::Parsed(value)
    }
}
