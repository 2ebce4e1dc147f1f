use std::sync::Arc;

use lesson_core::artifacts::{
    Artifact, ClassroomActivities, ConfusingPoints, ContentBreakdown, Dialogue,
    LearningLevelSuggestions, LearningObjectives, OnlineInteractiveQuiz, QuizDifficultyContent,
};
use lesson_core::enums::{ArtifactKind, Difficulty, Locale};
use lesson_core::lesson_plan::LessonPlanDraft;
use lesson_core::{AppError, ErrorCode, RawContent};
use lesson_provider::{ContentProvider, GenerationRequest, PromptBuilder, Provider};
use lesson_schema::ResponseValidator;
use serde_json::Value;
use tokio::task::{JoinError, JoinSet};

use crate::context::AppContext;

/// Optional sections of a generated lesson plan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlanSections {
    pub levels: bool,
    pub quiz: bool,
    pub dialogue: bool,
}

impl Default for PlanSections {
    fn default() -> Self {
        Self {
            levels: true,
            quiz: true,
            dialogue: true,
        }
    }
}

/// Generates artifacts about one topic and runs every response through the
/// validator before handing it back.
#[derive(Clone)]
pub struct Generator {
    provider: Arc<Provider>,
    validator: Arc<ResponseValidator>,
    locale: Locale,
    topic: String,
}

impl Generator {
    pub fn new(provider: Arc<Provider>, ctx: &AppContext, topic: &str) -> Self {
        Self::with_parts(provider, Arc::clone(&ctx.validator), ctx.locale, topic)
    }

    pub fn with_parts(
        provider: Arc<Provider>,
        validator: Arc<ResponseValidator>,
        locale: Locale,
        topic: &str,
    ) -> Self {
        Self {
            provider,
            validator,
            locale,
            topic: topic.to_string(),
        }
    }

    fn request(
        &self,
        kind: ArtifactKind,
        difficulty: Option<Difficulty>,
    ) -> Result<GenerationRequest, AppError> {
        PromptBuilder::new(self.validator.registry(), self.locale)
            .build(kind, &self.topic, difficulty)
            .map_err(|e| {
                AppError::localized(ErrorCode::Unknown, e.to_string(), self.locale).with_cause(e)
            })
    }

    async fn call(&self, request: &GenerationRequest) -> Result<RawContent, AppError> {
        tracing::debug!(
            kind = %request.kind,
            provider = self.provider.name(),
            model = self.provider.model(),
            "requesting generation"
        );
        self.provider
            .generate(request)
            .await
            .map_err(|e| e.into_app_error(self.locale))
    }

    /// Generate and validate one typed artifact.
    pub async fn artifact<A: Artifact>(&self, difficulty: Option<Difficulty>) -> Result<A, AppError> {
        let request = self.request(A::KIND, difficulty)?;
        let raw = self.call(&request).await?;
        self.validator
            .validate_or_raise::<A>(&raw, &self.provider.provenance())
    }

    /// Generate and validate any kind, returning the normalized JSON.
    pub async fn value(
        &self,
        kind: ArtifactKind,
        difficulty: Option<Difficulty>,
    ) -> Result<Value, AppError> {
        if kind == ArtifactKind::OnlineInteractiveQuiz {
            let quiz = self.quiz().await?;
            return serde_json::to_value(quiz).map_err(|e| {
                AppError::localized(ErrorCode::Unknown, e.to_string(), self.locale).with_cause(e)
            });
        }
        let request = self.request(kind, difficulty)?;
        let raw = self.call(&request).await?;
        self.validator
            .validate_kind_or_raise(kind, &raw, &self.provider.provenance())
    }

    /// Generate the three quiz levels concurrently and assemble them.
    ///
    /// The first failing level aborts the rest.
    pub async fn quiz(&self) -> Result<OnlineInteractiveQuiz, AppError> {
        let mut set = JoinSet::new();
        for difficulty in Difficulty::ALL {
            let generator = self.clone();
            set.spawn(async move {
                let level = generator
                    .artifact::<QuizDifficultyContent>(Some(difficulty))
                    .await?;
                Ok::<_, AppError>((difficulty, level))
            });
        }

        let mut levels = Vec::with_capacity(Difficulty::ALL.len());
        while let Some(joined) = set.join_next().await {
            let level = joined.map_err(|e| self.join_error(e))??;
            levels.push(level);
        }

        OnlineInteractiveQuiz::from_levels(levels).ok_or_else(|| {
            AppError::localized(
                ErrorCode::AiValidationError,
                "quiz generation did not produce every difficulty level",
                self.locale,
            )
        })
    }

    /// Generate a full lesson plan draft. Core sections are generated
    /// concurrently; any failure fails the whole plan.
    pub async fn plan(&self, sections: PlanSections) -> Result<LessonPlanDraft, AppError> {
        let levels = async {
            if sections.levels {
                self.artifact::<LearningLevelSuggestions>(None).await.map(Some)
            } else {
                Ok(None)
            }
        };
        let quiz = async {
            if sections.quiz {
                self.quiz().await.map(Some)
            } else {
                Ok(None)
            }
        };
        let dialogue = async {
            if sections.dialogue {
                self.artifact::<Dialogue>(None).await.map(Some)
            } else {
                Ok(None)
            }
        };

        let (
            learning_objectives,
            content_breakdown,
            confusing_points,
            classroom_activities,
            learning_levels,
            quiz,
            dialogue,
        ) = tokio::try_join!(
            self.artifact::<LearningObjectives>(None),
            self.artifact::<ContentBreakdown>(None),
            self.artifact::<ConfusingPoints>(None),
            self.artifact::<ClassroomActivities>(None),
            levels,
            quiz,
            dialogue,
        )?;

        tracing::info!(topic = %self.topic, "lesson plan generated");
        Ok(LessonPlanDraft {
            topic: self.topic.clone(),
            provenance: self.provider.provenance(),
            learning_objectives,
            content_breakdown,
            confusing_points,
            classroom_activities,
            learning_levels,
            quiz,
            dialogue,
        })
    }

    fn join_error(&self, error: JoinError) -> AppError {
        if error.is_panic() {
            AppError::from_opaque(&*error.into_panic(), self.locale)
        } else {
            AppError::coerce(error, self.locale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_provider::StaticProvider;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn bucket(statement: &str) -> Value {
        json!({
            "trueFalse": [{"statement": statement, "isTrue": true}],
            "multipleChoice": [{"question": "Pick", "options": ["a", "b"], "correctAnswer": 0}],
            "fillInTheBlanks": [{"sentence": "It ___ raining.", "correctAnswer": "is"}]
        })
    }

    fn static_provider() -> StaticProvider {
        StaticProvider::new()
            .with_response(
                "learningObjectives",
                r#"```json
[{"objective": "Describe weather", "description": "Use sunny, rainy, cloudy"}]
```"#,
            )
            .with_response("contentBreakdown", "[]")
            .with_response("confusingPoints", "[]")
            .with_response(
                "classroomActivities",
                json!([{"title": "Forecast", "description": "Present a forecast"}]),
            )
            .with_response(
                "learningLevels",
                json!({
                    "suggestedLevels": [{"id": "a1", "name": "A1", "description": "Start", "order": 1}],
                    "defaultLevelId": "a1"
                }),
            )
            .with_response("quizDifficulty-easy", bucket("easy"))
            .with_response("quizDifficulty-normal", bucket("normal"))
            .with_response("quizDifficulty-hard", bucket("hard"))
            .with_response("dialogue", r#"Sure! [{"speaker": "A", "line": "Nice day."}]"#)
    }

    fn generator(provider: StaticProvider) -> Generator {
        Generator::with_parts(
            Arc::new(Provider::Static(provider)),
            Arc::new(ResponseValidator::with_defaults().unwrap()),
            Locale::En,
            "Weather",
        )
    }

    #[tokio::test]
    async fn quiz_levels_land_in_their_slots() {
        let quiz = generator(static_provider()).quiz().await.unwrap();
        assert_eq!(quiz.easy.true_false[0].statement, "easy");
        assert_eq!(quiz.normal.true_false[0].statement, "normal");
        assert_eq!(quiz.hard.true_false[0].statement, "hard");
    }

    #[tokio::test]
    async fn one_bad_quiz_level_fails_the_quiz() {
        let provider = static_provider().with_response("quizDifficulty-hard", "{not json");
        let err = generator(provider).quiz().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AiParseError);
        assert_eq!(err.context["promptType"], "quizDifficulty");
    }

    #[tokio::test]
    async fn plan_collects_every_section() {
        let draft = generator(static_provider())
            .plan(PlanSections::default())
            .await
            .unwrap();
        assert_eq!(draft.topic, "Weather");
        assert_eq!(draft.provenance.provider.as_deref(), Some("static"));
        assert_eq!(draft.learning_objectives.len(), 1);
        assert!(draft.content_breakdown.is_empty());
        assert!(draft.learning_levels.is_some());
        assert!(draft.quiz.is_some());
        assert_eq!(draft.dialogue.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn skipped_sections_are_not_requested() {
        let provider = StaticProvider::new()
            .with_response("learningObjectives", json!([{"objective": "o", "description": "d"}]))
            .with_response("contentBreakdown", "[]")
            .with_response("confusingPoints", "[]")
            .with_response("classroomActivities", "[]");
        let sections = PlanSections {
            levels: false,
            quiz: false,
            dialogue: false,
        };
        let draft = generator(provider).plan(sections).await.unwrap();
        assert!(draft.learning_levels.is_none());
        assert!(draft.quiz.is_none());
        assert!(draft.dialogue.is_none());
    }

    #[tokio::test]
    async fn invalid_section_fails_the_plan() {
        let provider = static_provider().with_response("learningObjectives", "[]");
        let err = generator(provider)
            .plan(PlanSections::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AiValidationError);
    }

    #[tokio::test]
    async fn value_normalizes_quiz_difficulty_defaults() {
        let value = generator(static_provider())
            .value(ArtifactKind::QuizDifficulty, Some(Difficulty::Normal))
            .await
            .unwrap();
        assert_eq!(value["trueFalse"][0]["statement"], "normal");
        assert_eq!(value["sentenceScramble"], json!([]));
    }

    #[tokio::test]
    async fn missing_fixture_is_a_provider_error() {
        let err = generator(StaticProvider::new())
            .value(ArtifactKind::Dialogue, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AiProviderError);
    }
}
