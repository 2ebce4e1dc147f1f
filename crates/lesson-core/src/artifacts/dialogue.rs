use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ArtifactKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DialogueLine {
    #[schemars(length(min = 1))]
    pub speaker: String,
    #[schemars(length(min = 1))]
    pub line: String,
}

collection_artifact!(
    /// A conversation practice script. At least one line.
    Dialogue,
    DialogueLine,
    ArtifactKind::Dialogue,
    Some(1)
);

impl Dialogue {
    /// Distinct speakers in order of first appearance.
    #[must_use]
    pub fn speakers(&self) -> Vec<&str> {
        let mut speakers: Vec<&str> = Vec::new();
        for line in &self.0 {
            if !speakers.contains(&line.speaker.as_str()) {
                speakers.push(&line.speaker);
            }
        }
        speakers
    }
}
