use bf_core::entities::Issue;
use bf_core::enums::{IssueStatus, Priority};
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum_or};
use crate::commands::shared::rules::check_issue;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub project: i64,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due: Option<String>,
    pub assignee: Option<i64>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut issue = build_issue(params)?;
    check_issue(&issue, Some(Utc::now().date_naive()))?;
    ctx.db.save_issue(&mut issue).await?;
    output(&issue, flags.format)
}

fn build_issue(params: Params) -> anyhow::Result<Issue> {
    let mut issue = Issue::new(params.title.trim(), params.project);
    if let Some(description) = params.description {
        issue.description = description;
    }
    issue.priority = parse_enum_or::<Priority>(params.priority.as_deref(), "priority", issue.priority)?;
    issue.status = parse_enum_or::<IssueStatus>(params.status.as_deref(), "status", issue.status)?;
    if let Some(due) = params.due.as_deref() {
        issue.due_date = parse_date(due, "due")?;
    }
    issue.member_id = params.assignee;
    Ok(issue)
}
