use clap::Subcommand;

/// Schema registry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SchemaCommands {
    /// List every artifact kind with a registered schema.
    List,
    /// Print the JSON Schema for one artifact kind.
    Show {
        /// Artifact kind (e.g. learning-objectives, quiz-difficulty).
        kind: String,
    },
}

/// Lesson plan commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// Generate every artifact for a topic, validate, and save the plan.
    Generate {
        /// Lesson topic.
        topic: String,
        /// Skip the learning level suggestions.
        #[arg(long)]
        skip_levels: bool,
        /// Skip the three-level quiz.
        #[arg(long)]
        skip_quiz: bool,
        /// Skip the practice dialogue.
        #[arg(long)]
        skip_dialogue: bool,
    },
    /// List saved plans, newest first (see --limit).
    List,
    /// Get a saved plan by ID.
    Get { id: String },
    /// Delete a saved plan.
    Delete { id: String },
    /// Rewrite the plan log keeping only live plans.
    Compact,
}
