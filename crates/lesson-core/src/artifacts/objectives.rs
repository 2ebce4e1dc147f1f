use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ArtifactKind;

/// One learning objective for a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearningObjectiveItem {
    #[schemars(length(min = 1))]
    pub objective: String,
    #[schemars(length(min = 1))]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaching_example: Option<String>,
}

collection_artifact!(
    /// The learning objectives of a lesson. Never empty.
    LearningObjectives,
    LearningObjectiveItem,
    ArtifactKind::LearningObjectives,
    Some(1)
);
