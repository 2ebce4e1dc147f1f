use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Validate(args) => commands::validate::handle(&args, ctx, flags),
        Commands::Schema { action } => commands::schema::handle(&action, ctx, flags),
        Commands::Generate(args) => commands::generate::handle(&args, ctx, flags).await,
        Commands::Plan { action } => commands::plan::handle(&action, ctx, flags).await,
    }
}
