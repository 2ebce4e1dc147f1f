//! # lesson-core
//!
//! Core types and error taxonomy for Lesson.
//!
//! This crate provides the foundational types shared across all Lesson crates:
//! - Artifact structs for every kind of AI-generated lesson content
//!   (learning objectives, content breakdowns, quizzes, dialogues, etc.)
//! - `ArtifactKind`, `Difficulty`, and `Locale` enums
//! - `AppError`, the cross-crate error type with localized user messages
//!   and recovery actions
//! - `RawContent` and `Provenance`, the values exchanged at the provider boundary
//! - The stored `LessonPlan` record and CLI response types

pub mod artifacts;
pub mod enums;
pub mod errors;
pub mod lesson_plan;
pub mod messages;
pub mod provenance;
pub mod raw;
pub mod responses;

pub use errors::{ActionStyle, AppError, ErrorCode, RecoveryAction, RecoveryKind};
pub use provenance::Provenance;
pub use raw::RawContent;
