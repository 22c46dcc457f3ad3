use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_comment;
use crate::commands::shared::rules::check_comment;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, text: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut comment = require_comment(&ctx.db, id).await?;
    comment.text = text.trim().to_string();

    check_comment(&comment)?;
    ctx.db.save_comment(&mut comment).await?;
    output(&comment, flags.format)
}
