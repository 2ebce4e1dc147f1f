use lesson_core::responses::PlanCompactResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kept = ctx.store()?.compact().map_err(|e| e.into_app_error(ctx.locale))?;
    output(&PlanCompactResponse { kept }, flags.format)
}
