//! Typed shapes for every kind of AI-generated lesson content.
//!
//! Wire keys are camelCase, matching what the provider is asked to emit.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`; the
//! schema registry in `lesson-schema` builds its contracts from these
//! derives, so field-level constraints live here as `#[schemars(...)]`
//! attributes.

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::enums::ArtifactKind;

/// A top-level artifact the validation pipeline can produce.
pub trait Artifact: Serialize + DeserializeOwned + JsonSchema {
    const KIND: ArtifactKind;

    /// Minimum element count for artifacts whose root is a collection.
    ///
    /// Root-level newtypes cannot carry `#[schemars(length(...))]`, so the
    /// registry applies this as `minItems` on the generated root schema.
    const MIN_ITEMS: Option<u64> = None;
}

/// Declare a transparent collection artifact around `Vec<$item>`.
macro_rules! collection_artifact {
    ($(#[$meta:meta])* $name:ident, $item:ty, $kind:expr, $min:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
        #[serde(transparent)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            #[must_use]
            pub fn len(&self) -> usize {
                self.0.len()
            }

            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }

            #[must_use]
            pub fn into_inner(self) -> Vec<$item> {
                self.0
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl crate::artifacts::Artifact for $name {
            const KIND: crate::enums::ArtifactKind = $kind;
            const MIN_ITEMS: Option<u64> = $min;
        }
    };
}

mod activity;
mod breakdown;
mod confusing;
mod dialogue;
mod levels;
mod objectives;
mod quiz;

pub use activity::{ClassroomActivities, ClassroomActivity};
pub use breakdown::{ContentBreakdown, ContentBreakdownItem};
pub use confusing::{ConfusingPointItem, ConfusingPoints, CorrectVsWrong};
pub use dialogue::{Dialogue, DialogueLine};
pub use levels::{LearningLevel, LearningLevelSuggestions};
pub use objectives::{LearningObjectiveItem, LearningObjectives};
pub use quiz::{
    FillInTheBlankQuestion, MemoryCardGame, MemoryCardPair, MultipleChoiceQuestion,
    OnlineInteractiveQuiz, QuizDifficultyContent, SentenceScrambleQuestion, TrueFalseQuestion,
};
