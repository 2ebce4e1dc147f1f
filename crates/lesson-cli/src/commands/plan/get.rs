use lesson_core::responses::PlanResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan = ctx.store()?.get(id).map_err(|e| e.into_app_error(ctx.locale))?;
    output(&PlanResponse { plan }, flags.format)
}
