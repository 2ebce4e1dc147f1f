//! # lesson-store
//!
//! Storage for validated lesson plans.
//!
//! Plans are kept in an append-only JSONL log under the configured data
//! directory and addressed by `lpn-xxxxxxxx` ids. The store only accepts
//! typed [`LessonPlanDraft`](lesson_core::lesson_plan::LessonPlanDraft)s, so
//! nothing reaches disk without having passed the validation pipeline.

mod error;
mod id;
mod store;

pub use error::StoreError;
pub use id::{is_plan_id, new_plan_id};
pub use store::LessonPlanStore;
