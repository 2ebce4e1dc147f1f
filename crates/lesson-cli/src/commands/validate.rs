use lesson_core::{AppError, Provenance};
use lesson_schema::ValidationReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::commands::shared::parse::{parse_kind, read_input};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lsn validate`.
///
/// The report is always printed. A failed validation still exits non-zero.
pub fn handle(args: &ValidateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind, ctx.locale)?;
    let raw = read_input(args.input.as_deref())?;
    let validator = ctx.validator_with(args.extraction.map(Into::into))?;

    let provenance = Provenance {
        provider: args.provider.clone(),
        model: args.model.clone(),
    };
    let result = validator.validate_kind(kind, &raw.into(), &provenance);
    let failure = result.as_ref().err().cloned();

    output(&ValidationReport::from(result), flags.format)?;
    match failure {
        Some(error) => Err(AppError::from(error).into()),
        None => Ok(()),
    }
}
