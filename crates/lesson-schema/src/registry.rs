//! Central schema registry for all lesson artifact types.
//!
//! The `SchemaRegistry` builds JSON Schemas from lesson-core types at
//! construction time using [`schemars::schema_for!`], compiles each one once
//! with `jsonschema`, and checks values against them by [`ArtifactKind`].

use std::collections::HashMap;

use lesson_core::artifacts::{
    Artifact, ClassroomActivities, ConfusingPoints, ContentBreakdown, Dialogue,
    LearningLevelSuggestions, LearningObjectives, OnlineInteractiveQuiz, QuizDifficultyContent,
};
use lesson_core::enums::ArtifactKind;
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use crate::error::{FieldIssue, SchemaError};

/// A generated schema and its compiled validator.
struct RegisteredSchema {
    schema: Value,
    validator: jsonschema::Validator,
}

/// Central store of every artifact contract.
///
/// Constructed explicitly and owned by whoever needs it (usually a
/// [`ResponseValidator`](crate::ResponseValidator)).
pub struct SchemaRegistry {
    schemas: HashMap<ArtifactKind, RegisteredSchema>,
}

/// Generate the JSON Schema for an artifact, applying its root `minItems`.
///
/// # Errors
///
/// Returns `SchemaError::Generation` if the schema cannot be serialized.
pub fn artifact_schema<A: Artifact>() -> Result<Value, SchemaError> {
    let mut schema = type_schema::<A>()?;
    if let (Some(min), Some(root)) = (A::MIN_ITEMS, schema.as_object_mut()) {
        root.insert("minItems".to_string(), Value::from(min));
    }
    Ok(schema)
}

/// Generate the JSON Schema for any `JsonSchema` type.
///
/// Optional properties may be omitted, but when present they must carry
/// their declared type: the `null` that `Option<T>` adds is removed.
///
/// # Errors
///
/// Returns `SchemaError::Generation` if the schema cannot be serialized.
pub fn type_schema<T: JsonSchema>() -> Result<Value, SchemaError> {
    let mut schema = serde_json::to_value(schema_for!(T))
        .map_err(|e| SchemaError::Generation(format!("{e}")))?;
    forbid_null_optionals(&mut schema);
    Ok(schema)
}

/// Walk every subschema and strip `null` from non-required properties.
fn forbid_null_optionals(node: &mut Value) {
    match node {
        Value::Object(map) => {
            let required: Vec<String> = map
                .get("required")
                .and_then(Value::as_array)
                .map(|names| {
                    names
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            if let Some(Value::Object(properties)) = map.get_mut("properties") {
                for (name, property) in properties.iter_mut() {
                    if !required.contains(name) {
                        strip_null(property);
                    }
                }
            }
            for child in map.values_mut() {
                forbid_null_optionals(child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(forbid_null_optionals),
        _ => {}
    }
}

fn is_null_type(value: &Value) -> bool {
    value.as_str() == Some("null")
}

fn strip_null(property: &mut Value) {
    let Some(map) = property.as_object_mut() else {
        return;
    };

    // `"type": ["string", "null"]`
    let single_type = match map.get_mut("type") {
        Some(Value::Array(types)) => {
            types.retain(|t| !is_null_type(t));
            (types.len() == 1).then(|| types[0].clone())
        }
        _ => None,
    };
    if let Some(single) = single_type {
        map.insert("type".to_string(), single);
    }

    // `"anyOf": [{"$ref": ...}, {"type": "null"}]`
    let single_variant = match map.get_mut("anyOf") {
        Some(Value::Array(variants)) => {
            variants.retain(|v| !v.get("type").is_some_and(is_null_type));
            (variants.len() == 1).then(|| variants.remove(0))
        }
        _ => None,
    };
    if let Some(Value::Object(variant)) = single_variant {
        map.remove("anyOf");
        for (key, value) in variant {
            map.entry(key).or_insert(value);
        }
    }

    if map.get("default").is_some_and(Value::is_null) {
        map.remove("default");
    }
}

/// Compile a schema into a reusable validator.
///
/// # Errors
///
/// Returns `SchemaError::Generation` if the schema is not a valid JSON Schema.
pub fn compile(schema: &Value) -> Result<jsonschema::Validator, SchemaError> {
    jsonschema::validator_for(schema).map_err(|e| SchemaError::Generation(format!("{e}")))
}

/// Run a compiled validator and collect every violation.
///
/// # Errors
///
/// Returns `SchemaError::ValidationFailed` listing all violated paths.
pub fn check_with(validator: &jsonschema::Validator, instance: &Value) -> Result<(), SchemaError> {
    let issues: Vec<FieldIssue> = validator
        .iter_errors(instance)
        .map(|e| {
            let path = e.instance_path.to_string();
            FieldIssue {
                path: if path.is_empty() { "/".to_string() } else { path },
                message: format!("{e}"),
            }
        })
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::ValidationFailed { issues })
    }
}

macro_rules! register {
    ($map:expr, $ty:ty) => {{
        let schema = artifact_schema::<$ty>()?;
        let validator = compile(&schema)?;
        $map.insert(
            <$ty as Artifact>::KIND,
            RegisteredSchema { schema, validator },
        );
    }};
}

impl SchemaRegistry {
    /// Build a registry containing a compiled schema for every
    /// [`ArtifactKind`].
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if any generated schema fails to
    /// serialize or compile.
    pub fn new() -> Result<Self, SchemaError> {
        let mut schemas = HashMap::new();

        register!(schemas, LearningObjectives);
        register!(schemas, ContentBreakdown);
        register!(schemas, ConfusingPoints);
        register!(schemas, ClassroomActivities);
        register!(schemas, LearningLevelSuggestions);
        register!(schemas, QuizDifficultyContent);
        register!(schemas, OnlineInteractiveQuiz);
        register!(schemas, Dialogue);

        Ok(Self { schemas })
    }

    /// Get the JSON Schema for a kind.
    #[must_use]
    pub fn get(&self, kind: ArtifactKind) -> Option<&Value> {
        self.schemas.get(&kind).map(|entry| &entry.schema)
    }

    /// Look up a schema by its kind name (`learningObjectives`,
    /// `quiz-difficulty`, ...).
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the name is not a registered kind.
    pub fn get_by_name(&self, name: &str) -> Result<(ArtifactKind, &Value), SchemaError> {
        let kind: ArtifactKind = name
            .parse()
            .map_err(|_| SchemaError::NotFound(name.to_string()))?;
        self.get(kind)
            .map(|schema| (kind, schema))
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Validate a JSON value against the schema for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the kind is unregistered, or
    /// `SchemaError::ValidationFailed` with every violation found.
    pub fn validate(&self, kind: ArtifactKind, instance: &Value) -> Result<(), SchemaError> {
        let entry = self
            .schemas
            .get(&kind)
            .ok_or_else(|| SchemaError::NotFound(kind.to_string()))?;
        check_with(&entry.validator, instance)
    }

    /// Pretty-printed schema for `kind`, for export to editors and docs.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` for an unregistered kind.
    pub fn export(&self, kind: ArtifactKind) -> Result<String, SchemaError> {
        let schema = self
            .get(kind)
            .ok_or_else(|| SchemaError::NotFound(kind.to_string()))?;
        serde_json::to_string_pretty(schema).map_err(|e| SchemaError::Generation(format!("{e}")))
    }

    /// List all registered kinds, in declaration order.
    #[must_use]
    pub fn list(&self) -> Vec<ArtifactKind> {
        let mut kinds: Vec<ArtifactKind> = self.schemas.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}
