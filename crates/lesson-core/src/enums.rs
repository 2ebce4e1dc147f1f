//! Artifact kinds, quiz difficulties, and display locales.
//!
//! `ArtifactKind` names serialize in camelCase because they double as the
//! `promptType` reported in validation diagnostics. Parsing also accepts the
//! kebab-case and snake_case spellings used on the command line.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

/// The kind of AI-generated content being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ArtifactKind {
    LearningObjectives,
    ContentBreakdown,
    ConfusingPoints,
    ClassroomActivities,
    LearningLevels,
    QuizDifficulty,
    OnlineInteractiveQuiz,
    Dialogue,
}

impl ArtifactKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 8] = [
        Self::LearningObjectives,
        Self::ContentBreakdown,
        Self::ConfusingPoints,
        Self::ClassroomActivities,
        Self::LearningLevels,
        Self::QuizDifficulty,
        Self::OnlineInteractiveQuiz,
        Self::Dialogue,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LearningObjectives => "learningObjectives",
            Self::ContentBreakdown => "contentBreakdown",
            Self::ConfusingPoints => "confusingPoints",
            Self::ClassroomActivities => "classroomActivities",
            Self::LearningLevels => "learningLevels",
            Self::QuizDifficulty => "quizDifficulty",
            Self::OnlineInteractiveQuiz => "onlineInteractiveQuiz",
            Self::Dialogue => "dialogue",
        }
    }

    /// One-line human description, used by `lsn schema list`.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LearningObjectives => "Non-empty list of learning objectives",
            Self::ContentBreakdown => "Topic-by-topic content breakdown",
            Self::ConfusingPoints => "Commonly confused points with clarifications",
            Self::ClassroomActivities => "Classroom activities with steps and assessment points",
            Self::LearningLevels => "Suggested learning levels with a default level id",
            Self::QuizDifficulty => "Quiz questions for a single difficulty level",
            Self::OnlineInteractiveQuiz => "Full quiz with easy, normal, and hard levels",
            Self::Dialogue => "Conversation practice as speaker/line pairs",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown artifact kind: {s}"))
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Quiz difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Normal, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Language of user-facing error messages and action labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Locale {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
