use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ArtifactKind;

/// A correct/incorrect usage pair. All three fields travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CorrectVsWrong {
    #[schemars(length(min = 1))]
    pub correct: String,
    #[schemars(length(min = 1))]
    pub wrong: String,
    #[schemars(length(min = 1))]
    pub explanation: String,
}

/// A point learners commonly confuse, with how to clear it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfusingPointItem {
    #[schemars(length(min = 1))]
    pub point: String,
    #[schemars(length(min = 1))]
    pub clarification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_vs_wrong: Option<Vec<CorrectVsWrong>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevention_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correction_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_activities: Option<Vec<String>>,
}

collection_artifact!(
    ConfusingPoints,
    ConfusingPointItem,
    ArtifactKind::ConfusingPoints,
    None
);
