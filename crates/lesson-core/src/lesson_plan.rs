//! The persisted lesson plan record.
//!
//! A lesson plan bundles validated artifacts for one topic. Plans are built
//! from pipeline output only; storage never sees unvalidated provider text.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::artifacts::{
    ClassroomActivities, ConfusingPoints, ContentBreakdown, Dialogue, LearningLevelSuggestions,
    LearningObjectives, OnlineInteractiveQuiz,
};
use crate::provenance::Provenance;

/// ID prefix for stored lesson plans.
pub const LESSON_PLAN_PREFIX: &str = "lpn";

/// Content of a lesson plan before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LessonPlanDraft {
    pub topic: String,
    #[serde(default)]
    pub provenance: Provenance,
    pub learning_objectives: LearningObjectives,
    #[serde(default)]
    pub content_breakdown: ContentBreakdown,
    #[serde(default)]
    pub confusing_points: ConfusingPoints,
    #[serde(default)]
    pub classroom_activities: ClassroomActivities,
    pub learning_levels: Option<LearningLevelSuggestions>,
    pub quiz: Option<OnlineInteractiveQuiz>,
    pub dialogue: Option<Dialogue>,
}

/// A stored lesson plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LessonPlan {
    pub id: String,
    #[serde(flatten)]
    pub content: LessonPlanDraft,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LessonPlan {
    /// Wrap a draft with an id and fresh timestamps.
    #[must_use]
    pub fn from_draft(id: String, content: LessonPlanDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn summary(&self) -> LessonPlanSummary {
        LessonPlanSummary {
            id: self.id.clone(),
            topic: self.content.topic.clone(),
            objectives: self.content.learning_objectives.len(),
            has_quiz: self.content.quiz.is_some(),
            has_dialogue: self.content.dialogue.is_some(),
            created_at: self.created_at,
        }
    }
}

/// Compact listing row for a lesson plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LessonPlanSummary {
    pub id: String,
    pub topic: String,
    pub objectives: usize,
    pub has_quiz: bool,
    pub has_dialogue: bool,
    pub created_at: DateTime<Utc>,
}
