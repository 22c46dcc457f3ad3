use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_member;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let member = require_member(&ctx.db, id).await?;
    output(&member, flags.format)
}
