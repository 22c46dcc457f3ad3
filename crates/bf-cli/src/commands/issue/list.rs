use bf_core::entities::Issue;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project: Option<i64>,
    member: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut issues: Vec<Issue> = match (project, member) {
        (Some(project_id), _) => ctx.db.get_issues_by_project(project_id).await?,
        (None, Some(member_id)) => ctx.db.get_issues_by_member(member_id).await?,
        (None, None) => ctx.db.list_issues().await?,
    };

    if let (Some(_), Some(member_id)) = (project, member) {
        issues.retain(|issue| issue.member_id == Some(member_id));
    }

    output(&issues, flags.format)
}
