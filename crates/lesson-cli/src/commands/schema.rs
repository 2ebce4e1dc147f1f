use lesson_core::responses::{SchemaListResponse, SchemaSummary};
use lesson_core::{AppError, ErrorCode};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SchemaCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lsn schema`.
pub fn handle(action: &SchemaCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = ctx.validator.registry();
    match action {
        SchemaCommands::List => {
            let schemas = registry
                .list()
                .into_iter()
                .map(|kind| SchemaSummary {
                    kind,
                    description: kind.description().to_string(),
                })
                .collect();
            output(&SchemaListResponse { schemas }, flags.format)
        }
        SchemaCommands::Show { kind } => {
            let (_, schema) = registry.get_by_name(kind).map_err(|e| {
                AppError::localized(ErrorCode::ValidationInvalidInput, e.to_string(), ctx.locale)
                    .with_cause(e)
            })?;
            output(schema, flags.format)
        }
    }
}
