use lesson_core::responses::PlanResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::generation::{Generator, PlanSections};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    topic: &str,
    sections: PlanSections,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let draft = Generator::new(ctx.provider()?, ctx, topic)
        .plan(sections)
        .await?;
    let plan = store.save(draft).map_err(|e| e.into_app_error(ctx.locale))?;
    output(&PlanResponse { plan }, flags.format)
}
