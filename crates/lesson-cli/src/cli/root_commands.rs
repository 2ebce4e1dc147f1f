use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::global::{DifficultyArg, ExtractionArg};
use crate::cli::subcommands::{PlanCommands, SchemaCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate AI output against an artifact schema.
    Validate(ValidateArgs),
    /// Inspect artifact schemas.
    Schema {
        #[command(subcommand)]
        action: SchemaCommands,
    },
    /// Generate and validate a single artifact.
    Generate(GenerateArgs),
    /// Lesson plans.
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Artifact kind (e.g. learning-objectives, quiz-difficulty).
    pub kind: String,
    /// File holding the raw AI output; reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,
    /// Provider name to record in diagnostics.
    #[arg(long)]
    pub provider: Option<String>,
    /// Model name to record in diagnostics.
    #[arg(long)]
    pub model: Option<String>,
    /// Override the configured extraction strategy.
    #[arg(long, value_enum)]
    pub extraction: Option<ExtractionArg>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Artifact kind to generate.
    pub kind: String,
    /// Lesson topic.
    #[arg(long)]
    pub topic: String,
    /// Difficulty, for quiz-difficulty only.
    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyArg>,
}
