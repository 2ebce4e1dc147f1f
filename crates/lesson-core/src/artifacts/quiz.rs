//! Quiz questions, per-difficulty buckets, and the full three-level quiz.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::artifacts::Artifact;
use crate::enums::{ArtifactKind, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrueFalseQuestion {
    #[schemars(length(min = 1))]
    pub statement: String,
    pub is_true: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceQuestion {
    #[schemars(length(min = 1))]
    pub question: String,
    #[schemars(length(min = 2))]
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl MultipleChoiceQuestion {
    /// The option text `correct_answer` points at, if the index is in range.
    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        usize::try_from(self.correct_answer)
            .ok()
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FillInTheBlankQuestion {
    /// Sentence with the blank marked as `___`.
    #[schemars(length(min = 1))]
    pub sentence: String,
    #[schemars(length(min = 1))]
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentenceScrambleQuestion {
    #[schemars(length(min = 1))]
    pub original_sentence: String,
    #[schemars(length(min = 1))]
    pub scrambled_words: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemoryCardPair {
    #[schemars(length(min = 1))]
    pub front: String,
    #[schemars(length(min = 1))]
    pub back: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemoryCardGame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[schemars(length(min = 1))]
    pub pairs: Vec<MemoryCardPair>,
}

/// All questions generated for one difficulty level.
///
/// `sentence_scramble` and `memory_card_game` are genuinely optional in a
/// generated quiz and normalize to empty lists when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizDifficultyContent {
    pub true_false: Vec<TrueFalseQuestion>,
    pub multiple_choice: Vec<MultipleChoiceQuestion>,
    pub fill_in_the_blanks: Vec<FillInTheBlankQuestion>,
    #[serde(default)]
    pub sentence_scramble: Vec<SentenceScrambleQuestion>,
    #[serde(default)]
    pub memory_card_game: Vec<MemoryCardGame>,
}

impl QuizDifficultyContent {
    /// Total number of questions across all question types.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.true_false.len()
            + self.multiple_choice.len()
            + self.fill_in_the_blanks.len()
            + self.sentence_scramble.len()
            + self.memory_card_game.len()
    }
}

impl Artifact for QuizDifficultyContent {
    const KIND: ArtifactKind = ArtifactKind::QuizDifficulty;
}

/// A complete quiz. All three difficulty levels are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OnlineInteractiveQuiz {
    pub easy: QuizDifficultyContent,
    pub normal: QuizDifficultyContent,
    pub hard: QuizDifficultyContent,
}

impl OnlineInteractiveQuiz {
    #[must_use]
    pub const fn level(&self, difficulty: Difficulty) -> &QuizDifficultyContent {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Assemble a quiz from independently generated levels.
    ///
    /// Returns `None` unless every difficulty is present exactly once.
    #[must_use]
    pub fn from_levels(levels: Vec<(Difficulty, QuizDifficultyContent)>) -> Option<Self> {
        let mut easy = None;
        let mut normal = None;
        let mut hard = None;
        for (difficulty, content) in levels {
            let slot = match difficulty {
                Difficulty::Easy => &mut easy,
                Difficulty::Normal => &mut normal,
                Difficulty::Hard => &mut hard,
            };
            if slot.replace(content).is_some() {
                return None;
            }
        }
        Some(Self {
            easy: easy?,
            normal: normal?,
            hard: hard?,
        })
    }
}

impl Artifact for OnlineInteractiveQuiz {
    const KIND: ArtifactKind = ArtifactKind::OnlineInteractiveQuiz;
}
