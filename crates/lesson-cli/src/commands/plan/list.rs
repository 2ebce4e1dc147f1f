use lesson_core::responses::PlanListResponse;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut plans = ctx.store()?.list().map_err(|e| e.into_app_error(ctx.locale))?;
    let total = plans.len();
    plans.truncate(effective_limit(flags.limit, ctx.config.general.list_limit));
    output(&PlanListResponse { plans, total }, flags.format)
}
