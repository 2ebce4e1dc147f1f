//! Serde roundtrip and JsonSchema validation tests for all artifact types.

use chrono::Utc;
use lesson_core::artifacts::*;
use lesson_core::lesson_plan::{LessonPlan, LessonPlanDraft};
use lesson_core::Provenance;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn objectives() -> LearningObjectives {
    LearningObjectives(vec![LearningObjectiveItem {
        objective: "Order a meal".into(),
        description: "Use polite requests at a restaurant".into(),
        teaching_example: Some("Could I have the menu, please?".into()),
    }])
}

fn quiz_bucket() -> QuizDifficultyContent {
    QuizDifficultyContent {
        true_false: vec![TrueFalseQuestion {
            statement: "\"Menu\" is a noun.".into(),
            is_true: true,
            explanation: None,
        }],
        multiple_choice: vec![MultipleChoiceQuestion {
            question: "Which is polite?".into(),
            options: vec!["Give me water.".into(), "Could I have some water?".into()],
            correct_answer: 1,
            explanation: Some("Modal verbs soften requests.".into()),
        }],
        fill_in_the_blanks: vec![FillInTheBlankQuestion {
            sentence: "Could I ___ the bill?".into(),
            correct_answer: "have".into(),
            hint: None,
        }],
        sentence_scramble: vec![SentenceScrambleQuestion {
            original_sentence: "I would like soup".into(),
            scrambled_words: vec!["soup".into(), "like".into(), "I".into(), "would".into()],
            hint: None,
        }],
        memory_card_game: vec![MemoryCardGame {
            instructions: None,
            pairs: vec![MemoryCardPair {
                front: "bill".into(),
                back: "the check".into(),
            }],
        }],
    }
}

roundtrip_and_validate!(learning_objectives_roundtrip, LearningObjectives, objectives());

roundtrip_and_validate!(
    content_breakdown_roundtrip,
    ContentBreakdown,
    ContentBreakdown(vec![ContentBreakdownItem {
        topic: "Requests".into(),
        details: "Could / would / may".into(),
        teaching_example: None,
        core_concept: Some("Politeness".into()),
        teaching_sentences: Some(vec!["Could you help me?".into()]),
        teaching_tips: None,
    }])
);

roundtrip_and_validate!(
    confusing_points_roundtrip,
    ConfusingPoints,
    ConfusingPoints(vec![ConfusingPointItem {
        point: "much vs many".into(),
        clarification: "much for uncountable nouns".into(),
        teaching_example: None,
        error_type: Some("grammar".into()),
        common_errors: Some(vec!["many water".into()]),
        correct_vs_wrong: Some(vec![CorrectVsWrong {
            correct: "much water".into(),
            wrong: "many water".into(),
            explanation: "water is uncountable".into(),
        }]),
        prevention_strategy: None,
        correction_method: None,
        practice_activities: None,
    }])
);

roundtrip_and_validate!(
    classroom_activities_roundtrip,
    ClassroomActivities,
    ClassroomActivities(vec![ClassroomActivity {
        title: "Role play".into(),
        description: "Students order from a menu".into(),
        objective: None,
        timing: Some("10 minutes".into()),
        materials: Some("Printed menus".into()),
        environment: None,
        steps: Some(vec!["Pair up".into(), "Swap roles".into()]),
        assessment_points: None,
    }])
);

roundtrip_and_validate!(
    learning_levels_roundtrip,
    LearningLevelSuggestions,
    LearningLevelSuggestions {
        suggested_levels: vec![LearningLevel {
            id: "a1".into(),
            name: "Beginner".into(),
            description: "First contact".into(),
            order: 1,
        }],
        default_level_id: "a1".into(),
    }
);

roundtrip_and_validate!(
    dialogue_roundtrip,
    Dialogue,
    Dialogue(vec![DialogueLine {
        speaker: "Waiter".into(),
        line: "Are you ready to order?".into(),
    }])
);

roundtrip_and_validate!(quiz_difficulty_roundtrip, QuizDifficultyContent, quiz_bucket());

roundtrip_and_validate!(
    online_quiz_roundtrip,
    OnlineInteractiveQuiz,
    OnlineInteractiveQuiz {
        easy: quiz_bucket(),
        normal: quiz_bucket(),
        hard: quiz_bucket(),
    }
);

roundtrip_and_validate!(
    lesson_plan_roundtrip,
    LessonPlan,
    LessonPlan::from_draft(
        "lpn-0a1b2c3d".into(),
        LessonPlanDraft {
            topic: "Ordering food".into(),
            provenance: Provenance::new("openai", "gpt-4o-mini"),
            learning_objectives: objectives(),
            content_breakdown: ContentBreakdown::default(),
            confusing_points: ConfusingPoints::default(),
            classroom_activities: ClassroomActivities::default(),
            learning_levels: None,
            quiz: None,
            dialogue: None,
        },
        Utc::now(),
    )
);

#[test]
fn artifact_json_uses_camel_case_keys() {
    let json = serde_json::to_value(quiz_bucket()).unwrap();
    for key in [
        "trueFalse",
        "multipleChoice",
        "fillInTheBlanks",
        "sentenceScramble",
        "memoryCardGame",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn partial_correct_vs_wrong_fails_schema() {
    let schema = serde_json::to_value(schema_for!(ConfusingPoints)).unwrap();
    let instance = serde_json::json!([{
        "point": "much vs many",
        "clarification": "countability",
        "correctVsWrong": [{"correct": "much water"}]
    }]);
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty());
}
