use lesson_core::enums::ArtifactKind;
use lesson_core::{AppError, ErrorCode};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared::generation::Generator;
use crate::commands::shared::parse::parse_kind;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lsn generate`: one provider call (three for the full quiz),
/// validated before anything is printed.
pub async fn handle(args: &GenerateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = parse_kind(&args.kind, ctx.locale)?;
    let difficulty = args.difficulty.map(Into::into);
    if difficulty.is_some() != (kind == ArtifactKind::QuizDifficulty) {
        return Err(AppError::localized(
            ErrorCode::ValidationInvalidInput,
            format!("--difficulty applies to {} only", ArtifactKind::QuizDifficulty),
            ctx.locale,
        )
        .with_context("kind", kind.as_str())
        .into());
    }

    let generator = Generator::new(ctx.provider()?, ctx, &args.topic);
    let value = generator.value(kind, difficulty).await?;
    output(&value, flags.format)
}
