use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which AI backend and model produced a piece of raw content.
///
/// Carried through validation for diagnostics only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Provenance {
    pub provider: Option<String>,
    pub model: Option<String>,
}

impl Provenance {
    #[must_use]
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            model: Some(model.into()),
        }
    }

    /// No provenance known.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            provider: None,
            model: None,
        }
    }
}
