use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_issue;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    with_comments: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if with_comments {
        let loaded = ctx
            .db
            .get_issue_with_comments(id)
            .await?
            .with_context(|| format!("issue {id} not found"))?;
        return output(&loaded, flags.format);
    }

    let issue = require_issue(&ctx.db, id).await?;
    output(&issue, flags.format)
}
