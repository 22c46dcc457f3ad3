use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(issue: Option<i64>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let comments = match issue {
        Some(issue_id) => ctx.db.get_comments_by_issue(issue_id).await?,
        None => ctx.db.list_comments().await?,
    };
    output(&comments, flags.format)
}
