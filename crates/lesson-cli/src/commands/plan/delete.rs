use lesson_core::responses::PlanDeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.store()?.delete(id).map_err(|e| e.into_app_error(ctx.locale))?;
    output(
        &PlanDeleteResponse {
            id: id.to_string(),
            deleted: true,
        },
        flags.format,
    )
}
