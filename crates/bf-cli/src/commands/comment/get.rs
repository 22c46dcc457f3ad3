use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_comment;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let comment = require_comment(&ctx.db, id).await?;
    output(&comment, flags.format)
}
