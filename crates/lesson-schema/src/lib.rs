//! # lesson-schema
//!
//! Turns untrusted AI output into validated lesson artifacts.
//!
//! This crate provides:
//! - `extract`: locate and parse the JSON inside a provider's text response
//! - `SchemaRegistry`: one compiled JSON Schema per `ArtifactKind`
//! - `ResponseValidator`: the extract-then-validate pipeline producing
//!   `Result<T, AppValidationError>`
//! - Bounded previews of offending content for diagnostics
//!
//! ## Architecture
//!
//! Artifact types are defined in `lesson-core` with `#[derive(JsonSchema)]`.
//! This crate generates their schemas with `schemars`, validates with
//! `jsonschema` to collect every violated path, then deserializes with
//! `serde` so schema-declared defaults are applied to the returned value.

pub mod error;
pub mod extract;
pub mod pipeline;
pub mod preview;
pub mod registry;

pub use error::{
    AppValidationError, ErrorContext, FieldIssue, SchemaError, ValidationErrorKind,
    ValidationReport,
};
pub use extract::ExtractionStrategy;
pub use pipeline::{ResponseValidator, ValidatorOptions};
pub use registry::SchemaRegistry;
