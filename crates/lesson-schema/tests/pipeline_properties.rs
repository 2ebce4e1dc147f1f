//! End-to-end behavior of the extract-then-validate pipeline.

use lesson_core::artifacts::{
    ClassroomActivities, LearningObjectives, OnlineInteractiveQuiz, QuizDifficultyContent,
};
use lesson_core::enums::ArtifactKind;
use lesson_core::{Provenance, RawContent};
use lesson_schema::{ResponseValidator, ValidationErrorKind, ValidationReport};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
struct NamedValue {
    name: String,
    value: f64,
}

#[derive(Debug, Deserialize, JsonSchema, PartialEq)]
struct Identified {
    id: i64,
}

#[fixture]
fn validator() -> ResponseValidator {
    ResponseValidator::with_defaults().expect("validator should build")
}

fn provenance() -> Provenance {
    Provenance::new("openai", "gpt-4o-mini")
}

const OBJECTIVES: &str = r#"[{"objective": "Order a meal", "description": "Use polite requests"}]"#;

fn quiz_bucket() -> Value {
    json!({
        "trueFalse": [{"statement": "Soup is a drink.", "isTrue": false}],
        "multipleChoice": [{"question": "Pick the polite form", "options": ["Give", "Could I have"], "correctAnswer": 1}],
        "fillInTheBlanks": [{"sentence": "Could I ___ the bill?", "correctAnswer": "have"}]
    })
}

#[rstest]
#[case::object(r#"{"name": "test", "value": 42}"#)]
#[case::array(r#"[{"id": 1}]"#)]
fn bare_json_extracts_unchanged(validator: ResponseValidator, #[case] input: &str) {
    let expected: Value = serde_json::from_str(input).unwrap();
    let parsed = validator
        .parse(&RawContent::from(input), "test", &provenance())
        .unwrap();
    assert_eq!(parsed, expected);
}

#[rstest]
#[case::object(json!({
    "name": "Fenced code",
    "value": 1,
    "note": "Wrap code in ```python fences, e.g. ```json\n{}\n```"
}))]
#[case::array(json!([{
    "objective": "Code blocks",
    "description": "Wrap code in ```python fences",
    "teachingExample": "```json\n{}\n```"
}]))]
fn fence_markers_inside_strings_survive(validator: ResponseValidator, #[case] expected: Value) {
    let bare = expected.to_string();
    let parsed = validator
        .parse(&RawContent::from(bare.as_str()), "test", &provenance())
        .unwrap();
    assert_eq!(parsed, expected);

    let fenced = format!("```json\n{bare}\n```");
    let unwrapped = validator
        .parse(&RawContent::from(fenced), "test", &provenance())
        .unwrap();
    assert_eq!(unwrapped, expected);
}

#[rstest]
fn fenced_json_validates_like_bare_json(validator: ResponseValidator) {
    let fenced = format!("```json\n{OBJECTIVES}\n```");
    let bare = validator
        .validate_kind(ArtifactKind::LearningObjectives, &RawContent::from(OBJECTIVES), &provenance())
        .unwrap();
    let unwrapped = validator
        .validate_kind(ArtifactKind::LearningObjectives, &RawContent::from(fenced), &provenance())
        .unwrap();
    assert_eq!(bare, unwrapped);
}

#[rstest]
fn prose_around_json_is_tolerated(validator: ResponseValidator) {
    let raw = RawContent::from(r#"Here is the result:
{"name": "test", "value": 42}
End of response."#);
    let data: NamedValue = validator.validate_as(&raw, "test", &provenance()).unwrap();
    assert_eq!(data.name, "test");
}

#[rstest]
fn learning_objectives_need_at_least_one_item(validator: ResponseValidator) {
    let empty = validator.validate::<LearningObjectives>(&RawContent::from("[]"), &provenance());
    assert_eq!(empty.unwrap_err().kind, ValidationErrorKind::ValidationError);

    let one = validator
        .validate::<LearningObjectives>(&RawContent::from(OBJECTIVES), &provenance())
        .unwrap();
    assert_eq!(one.len(), 1);
}

#[rstest]
fn quiz_difficulty_defaults_missing_buckets(validator: ResponseValidator) {
    let raw = RawContent::from(quiz_bucket());

    let typed = validator
        .validate::<QuizDifficultyContent>(&raw, &provenance())
        .unwrap();
    assert!(typed.sentence_scramble.is_empty());
    assert!(typed.memory_card_game.is_empty());

    let data = validator
        .validate_kind(ArtifactKind::QuizDifficulty, &raw, &provenance())
        .unwrap();
    assert_eq!(data["sentenceScramble"], json!([]));
    assert_eq!(data["memoryCardGame"], json!([]));
    assert_eq!(data["trueFalse"][0]["statement"], "Soup is a drink.");
}

#[rstest]
fn full_quiz_requires_every_level(validator: ResponseValidator) {
    let easy_only = RawContent::from(json!({"easy": quiz_bucket()}));
    let err = validator
        .validate::<OnlineInteractiveQuiz>(&easy_only, &provenance())
        .unwrap_err();
    assert!(err.is_validation_error());

    let full = RawContent::from(json!({
        "easy": quiz_bucket(),
        "normal": quiz_bucket(),
        "hard": quiz_bucket()
    }));
    let quiz = validator
        .validate::<OnlineInteractiveQuiz>(&full, &provenance())
        .unwrap();
    assert_eq!(quiz.hard.true_false.len(), 1);
}

#[rstest]
fn matching_input_succeeds(validator: ResponseValidator) {
    let raw = RawContent::from(r#"{"name": "test", "value": 42}"#);
    let data: NamedValue = validator.validate_as(&raw, "test", &provenance()).unwrap();
    assert_eq!(
        data,
        NamedValue {
            name: "test".into(),
            value: 42.0
        }
    );
}

#[rstest]
fn unquoted_value_is_a_parse_error(validator: ResponseValidator) {
    let raw = RawContent::from(r#"{"name": "test", value: }"#);
    let err = validator
        .validate_as::<NamedValue>(&raw, "test", &provenance())
        .unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::ParseError);
    assert_eq!(
        err.context.raw_output_preview.as_deref(),
        Some(r#"{"name": "test", value: }"#)
    );
}

#[rstest]
fn wrong_fields_are_a_validation_error(validator: ResponseValidator) {
    let raw = RawContent::from(json!({"wrong": "fields"}));
    let err = validator
        .validate_as::<NamedValue>(&raw, "test", &provenance())
        .unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::ValidationError);
    assert_eq!(err.context.prompt_type.as_deref(), Some("test"));
    assert_eq!(err.context.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(
        err.context.raw_output_preview.as_deref(),
        Some(r#"{"wrong":"fields"}"#)
    );
    assert!(err.issues.len() >= 2, "{:?}", err.issues);
}

#[rstest]
fn array_of_records_succeeds(validator: ResponseValidator) {
    let raw = RawContent::from(r#"[{"id":1},{"id":2}]"#);
    let data: Vec<Identified> = validator.validate_as(&raw, "ids", &provenance()).unwrap();
    assert_eq!(data, vec![Identified { id: 1 }, Identified { id: 2 }]);
}

#[rstest]
fn long_input_preview_is_truncated(validator: ResponseValidator) {
    let long = format!("{{\"name\": {}", "x".repeat(500));
    let err = validator
        .validate_as::<NamedValue>(&RawContent::from(long.as_str()), "test", &provenance())
        .unwrap_err();
    assert!(err.is_parse_error());

    let preview = err.context.raw_output_preview.unwrap();
    assert!(preview.ends_with("..."));
    assert!(preview.chars().count() <= validator.options().preview_len);
    assert!(preview.len() < long.len());
}

#[rstest]
fn pipeline_never_reports_unknown(validator: ResponseValidator) {
    let inputs = [
        RawContent::from(""),
        RawContent::from("   "),
        RawContent::from("```json\n```"),
        RawContent::from(json!(null)),
        RawContent::from(json!(42)),
        RawContent::from("[[[["),
    ];
    for raw in &inputs {
        for kind in ArtifactKind::ALL {
            let err = validator.validate_kind(kind, raw, &provenance()).unwrap_err();
            assert_ne!(err.kind, ValidationErrorKind::UnknownError, "{kind} on {raw:?}");
        }
    }
}

#[rstest]
fn report_serializes_success_and_failure(validator: ResponseValidator) {
    let ok: ValidationReport = validator
        .validate_kind(ArtifactKind::Dialogue, &RawContent::from(r#"[{"speaker": "A", "line": "Hi"}]"#), &provenance())
        .into();
    let ok = serde_json::to_value(ok).unwrap();
    assert_eq!(ok["success"], true);
    assert_eq!(ok["data"][0]["speaker"], "A");

    let failed: ValidationReport = validator
        .validate_kind(ArtifactKind::Dialogue, &RawContent::from("{oops"), &provenance())
        .into();
    let failed = serde_json::to_value(failed).unwrap();
    assert_eq!(failed["success"], false);
    assert_eq!(failed["error"]["type"], "PARSE_ERROR");
    assert_eq!(failed["error"]["context"]["provider"], "openai");
}

#[rstest]
#[case::objective(
    ArtifactKind::LearningObjectives,
    json!([{"objective": "o", "description": "d", "teachingExample": null}]),
    "/0/teachingExample"
)]
#[case::activity_steps(
    ArtifactKind::ClassroomActivities,
    json!([{"title": "t", "description": "d", "steps": null}]),
    "/0/steps"
)]
#[case::confusing_point(
    ArtifactKind::ConfusingPoints,
    json!([{"point": "p", "clarification": "c", "correctVsWrong": null}]),
    "/0/correctVsWrong"
)]
#[case::objective_wrong_type(
    ArtifactKind::LearningObjectives,
    json!([{"objective": "o", "description": "d", "teachingExample": ["e"]}]),
    "/0/teachingExample"
)]
#[case::breakdown_wrong_type(
    ArtifactKind::ContentBreakdown,
    json!([{"topic": "t", "details": "d", "teachingTips": 3}]),
    "/0/teachingTips"
)]
fn present_optional_must_match_declared_type(
    validator: ResponseValidator,
    #[case] kind: ArtifactKind,
    #[case] value: Value,
    #[case] path: &str,
) {
    let err = validator
        .validate_kind(kind, &RawContent::from(value.to_string()), &provenance())
        .unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::ValidationError);
    assert_eq!(err.issues[0].path, path, "{:?}", err.issues);
}

#[rstest]
fn null_steps_and_assessment_points_are_both_reported(validator: ResponseValidator) {
    let raw = RawContent::from(json!([{
        "title": "t",
        "description": "d",
        "steps": null,
        "assessmentPoints": null
    }]));
    let err = validator
        .validate::<ClassroomActivities>(&raw, &provenance())
        .unwrap_err();
    let paths: Vec<&str> = err.issues.iter().map(|i| i.path.as_str()).collect();
    assert!(paths.contains(&"/0/steps"), "{paths:?}");
    assert!(paths.contains(&"/0/assessmentPoints"), "{paths:?}");
}

#[rstest]
fn absent_optionals_stay_absent_in_normalized_output(validator: ResponseValidator) {
    let data = validator
        .validate_kind(
            ArtifactKind::ClassroomActivities,
            &RawContent::from(r#"[{"title": "t", "description": "d"}]"#),
            &provenance(),
        )
        .unwrap();
    assert_eq!(data, json!([{"title": "t", "description": "d"}]));
}
