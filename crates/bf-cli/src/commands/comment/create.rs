use bf_core::entities::Comment;

use crate::cli::GlobalFlags;
use crate::commands::shared::rules::check_comment;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    text: &str,
    author: i64,
    issue: i64,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut comment = Comment::new(text.trim(), author, issue);
    check_comment(&comment)?;
    ctx.db.save_comment(&mut comment).await?;
    output(&comment, flags.format)
}
