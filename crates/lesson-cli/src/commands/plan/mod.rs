mod compact;
mod delete;
mod generate;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanCommands;
use crate::commands::shared::generation::PlanSections;
use crate::context::AppContext;

/// Handle `lsn plan`.
pub async fn handle(action: &PlanCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PlanCommands::Generate {
            topic,
            skip_levels,
            skip_quiz,
            skip_dialogue,
        } => {
            let sections = PlanSections {
                levels: !skip_levels,
                quiz: !skip_quiz,
                dialogue: !skip_dialogue,
            };
            generate::run(topic, sections, ctx, flags).await
        }
        PlanCommands::List => list::run(ctx, flags),
        PlanCommands::Get { id } => get::run(id, ctx, flags),
        PlanCommands::Delete { id } => delete::run(id, ctx, flags),
        PlanCommands::Compact => compact::run(ctx, flags),
    }
}
