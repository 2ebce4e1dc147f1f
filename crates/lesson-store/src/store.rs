//! Append-only JSONL plan log.
//!
//! Every mutation appends one record to `{data_dir}/plans.jsonl`; the live
//! set of plans is the replay of that log. Saves carry the full plan,
//! deletes carry only the id. [`LessonPlanStore::compact`] rewrites the log
//! down to one save per live plan.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use lesson_core::lesson_plan::{LessonPlan, LessonPlanDraft, LessonPlanSummary};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::id::new_plan_id;

const PLANS_FILE: &str = "plans.jsonl";

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum PlanRecord {
    Save { plan: LessonPlan },
    Delete { id: String, ts: DateTime<Utc> },
}

/// Stores validated lesson plans keyed by generated id.
pub struct LessonPlanStore {
    path: PathBuf,
}

impl LessonPlanStore {
    /// Open (or create) the store under `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Write` if the directory cannot be created.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|source| StoreError::Write {
            path: data_dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: data_dir.join(PLANS_FILE),
        })
    }

    /// Path of the backing JSONL file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a draft under a freshly minted id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IdGeneration` or `StoreError::Write`.
    pub fn save(&self, draft: LessonPlanDraft) -> Result<LessonPlan, StoreError> {
        let plan = LessonPlan::from_draft(new_plan_id()?, draft, Utc::now());
        self.append(&PlanRecord::Save { plan: plan.clone() })?;
        tracing::info!(id = %plan.id, topic = %plan.content.topic, "lesson plan saved");
        Ok(plan)
    }

    /// Fetch a live plan by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for unknown or deleted ids, or a read
    /// error if the log cannot be replayed.
    pub fn get(&self, id: &str) -> Result<LessonPlan, StoreError> {
        self.load()?
            .into_iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Summaries of all live plans, newest first.
    ///
    /// # Errors
    ///
    /// Returns a read error if the log cannot be replayed.
    pub fn list(&self) -> Result<Vec<LessonPlanSummary>, StoreError> {
        let mut plans = self.load()?;
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans.iter().map(LessonPlan::summary).collect())
    }

    /// Delete a live plan.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no live plan has `id`.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        if !self.load()?.iter().any(|plan| plan.id == id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.append(&PlanRecord::Delete {
            id: id.to_string(),
            ts: Utc::now(),
        })?;
        tracing::info!(id, "lesson plan deleted");
        Ok(())
    }

    /// Rewrite the log with one save record per live plan. Returns the
    /// number of plans kept.
    ///
    /// # Errors
    ///
    /// Returns a read error if the log cannot be replayed, or
    /// `StoreError::Write` if the rewritten log cannot be put in place.
    pub fn compact(&self) -> Result<usize, StoreError> {
        let records: Vec<PlanRecord> = self
            .load()?
            .into_iter()
            .map(|plan| PlanRecord::Save { plan })
            .collect();
        let count = records.len();

        let tmp = self.path.with_extension("jsonl.tmp");
        serde_jsonlines::write_json_lines(&tmp, &records).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(kept = count, "plan log compacted");
        Ok(count)
    }

    /// Replay the log into the live plan set, in save order.
    fn load(&self) -> Result<Vec<LessonPlan>, StoreError> {
        let mut plans: Vec<LessonPlan> = Vec::new();
        for record in self.records()? {
            match record {
                PlanRecord::Save { plan } => {
                    plans.retain(|existing| existing.id != plan.id);
                    plans.push(plan);
                }
                PlanRecord::Delete { id, .. } => plans.retain(|plan| plan.id != id),
            }
        }
        Ok(plans)
    }

    fn records(&self) -> Result<Vec<PlanRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let lines = serde_jsonlines::json_lines(&self.path).map_err(|source| {
            StoreError::Read {
                path: self.path.clone(),
                source,
            }
        })?;

        lines
            .enumerate()
            .map(|(index, record)| {
                record.map_err(|e| StoreError::Corrupt {
                    path: self.path.clone(),
                    line: index + 1,
                    message: e.to_string(),
                })
            })
            .collect()
    }

    fn append(&self, record: &PlanRecord) -> Result<(), StoreError> {
        serde_jsonlines::append_json_lines(&self.path, [record]).map_err(|source| {
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }
}
