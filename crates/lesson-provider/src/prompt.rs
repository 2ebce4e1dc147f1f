//! Prompt construction.
//!
//! Every prompt embeds the registry's JSON Schema for the requested
//! artifact, so the contract the model is asked to follow is the same one
//! its answer is validated against.

use lesson_core::enums::{ArtifactKind, Difficulty, Locale};
use lesson_schema::{SchemaError, SchemaRegistry};

/// One generation call: what to ask for and how to ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: ArtifactKind,
    /// Set only for [`ArtifactKind::QuizDifficulty`].
    pub difficulty: Option<Difficulty>,
    pub prompt: String,
    /// Whether the expected document is a JSON object. Array-rooted
    /// artifacts cannot use a provider's object-only JSON mode.
    pub json_object: bool,
}

impl GenerationRequest {
    /// Name reported as `promptType` in validation diagnostics.
    #[must_use]
    pub const fn prompt_type(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Lookup key for canned responses: `quizDifficulty-easy`, `dialogue`, ...
    #[must_use]
    pub fn fixture_name(&self) -> String {
        match self.difficulty {
            Some(difficulty) => format!("{}-{difficulty}", self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// Builds generation prompts from the schema registry.
pub struct PromptBuilder<'a> {
    registry: &'a SchemaRegistry,
    locale: Locale,
}

impl<'a> PromptBuilder<'a> {
    #[must_use]
    pub const fn new(registry: &'a SchemaRegistry, locale: Locale) -> Self {
        Self { registry, locale }
    }

    /// Build the request for one artifact about `topic`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if `kind` has no registered schema.
    pub fn build(
        &self,
        kind: ArtifactKind,
        topic: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<GenerationRequest, SchemaError> {
        let schema = self.registry.export(kind)?;
        let json_object = self
            .registry
            .get(kind)
            .and_then(|s| s.get("type"))
            .and_then(serde_json::Value::as_str)
            == Some("object");

        let mut prompt = format!(
            "You are an experienced language teacher preparing lesson material.\n\
             Topic: {topic}\n\
             Task: {}.\n",
            kind.description()
        );
        if let Some(difficulty) = difficulty {
            prompt.push_str(&format!("Difficulty: {difficulty}.\n"));
        }
        if self.locale == Locale::ZhTw {
            prompt.push_str("Write explanations and instructions in Traditional Chinese.\n");
        }
        prompt.push_str(
            "Respond with JSON only. Do not add commentary or markdown fences. \
             Use exactly the camelCase keys of this JSON Schema:\n",
        );
        prompt.push_str(&schema);

        Ok(GenerationRequest {
            kind,
            difficulty,
            prompt,
            json_object,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompt_embeds_schema_and_topic() {
        let registry = SchemaRegistry::new().unwrap();
        let request = PromptBuilder::new(&registry, Locale::En)
            .build(ArtifactKind::Dialogue, "Ordering coffee", None)
            .unwrap();
        assert!(request.prompt.contains("Ordering coffee"));
        assert!(request.prompt.contains("\"speaker\""));
        assert!(!request.json_object);
        assert_eq!(request.prompt_type(), "dialogue");
        assert_eq!(request.fixture_name(), "dialogue");
    }

    #[test]
    fn quiz_difficulty_prompt_is_object_rooted() {
        let registry = SchemaRegistry::new().unwrap();
        let request = PromptBuilder::new(&registry, Locale::ZhTw)
            .build(ArtifactKind::QuizDifficulty, "Weather", Some(Difficulty::Hard))
            .unwrap();
        assert!(request.json_object);
        assert!(request.prompt.contains("Difficulty: hard."));
        assert!(request.prompt.contains("Traditional Chinese"));
        assert_eq!(request.fixture_name(), "quizDifficulty-hard");
    }
}
