use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ArtifactKind;

/// A single topic in a lesson's content breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentBreakdownItem {
    #[schemars(length(min = 1))]
    pub topic: String,
    #[schemars(length(min = 1))]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_concept: Option<String>,
    /// Model sentences in teaching order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_sentences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_tips: Option<String>,
}

collection_artifact!(
    /// Topic-by-topic breakdown. May be empty.
    ContentBreakdown,
    ContentBreakdownItem,
    ArtifactKind::ContentBreakdown,
    None
);
