//! CLI response types returned as JSON by `lsn` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ArtifactKind;
use crate::lesson_plan::{LessonPlan, LessonPlanSummary};

/// One row of `lsn schema list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SchemaSummary {
    pub kind: ArtifactKind,
    pub description: String,
}

/// Response from `lsn schema list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SchemaListResponse {
    pub schemas: Vec<SchemaSummary>,
}

/// Response from `lsn plan generate` and `lsn plan get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanResponse {
    pub plan: LessonPlan,
}

/// Response from `lsn plan list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanListResponse {
    pub plans: Vec<LessonPlanSummary>,
    pub total: usize,
}

/// Response from `lsn plan delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanDeleteResponse {
    pub id: String,
    pub deleted: bool,
}

/// Response from `lsn plan compact`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanCompactResponse {
    pub kept: usize,
}
