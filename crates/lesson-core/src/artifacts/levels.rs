use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::artifacts::Artifact;
use crate::enums::ArtifactKind;

/// A suggested learning level for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LearningLevel {
    #[schemars(length(min = 1))]
    pub id: String,
    #[schemars(length(min = 1))]
    pub name: String,
    #[schemars(length(min = 1))]
    pub description: String,
    /// 1-based position in the progression.
    #[schemars(range(min = 1))]
    pub order: u32,
}

/// Levels the AI suggests for a topic, plus the one to preselect.
///
/// `default_level_id` is not checked against `suggested_levels`; use
/// [`LearningLevelSuggestions::default_level`] to resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearningLevelSuggestions {
    #[schemars(length(min = 1))]
    pub suggested_levels: Vec<LearningLevel>,
    pub default_level_id: String,
}

impl LearningLevelSuggestions {
    /// The level `default_level_id` points at, if it exists.
    #[must_use]
    pub fn default_level(&self) -> Option<&LearningLevel> {
        self.suggested_levels
            .iter()
            .find(|level| level.id == self.default_level_id)
    }

    /// Levels sorted by `order`.
    #[must_use]
    pub fn ordered(&self) -> Vec<&LearningLevel> {
        let mut levels: Vec<&LearningLevel> = self.suggested_levels.iter().collect();
        levels.sort_by_key(|level| level.order);
        levels
    }
}

impl Artifact for LearningLevelSuggestions {
    const KIND: ArtifactKind = ArtifactKind::LearningLevels;
}
