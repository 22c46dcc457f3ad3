use bf_core::enums::{IssueStatus, Priority};
use chrono::Utc;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_issue;
use crate::commands::shared::parse::{parse_date, parse_enum_or};
use crate::commands::shared::rules::check_issue;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due: Option<String>,
    pub project: Option<i64>,
    pub assignee: Option<i64>,
    pub unassign: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let mut issue = require_issue(&ctx.db, params.id).await?;

    if let Some(title) = params.title {
        issue.title = title.trim().to_string();
    }
    if let Some(description) = params.description {
        issue.description = description;
    }
    issue.priority = parse_enum_or::<Priority>(params.priority.as_deref(), "priority", issue.priority)?;
    issue.status = parse_enum_or::<IssueStatus>(params.status.as_deref(), "status", issue.status)?;
    if let Some(project) = params.project {
        issue.project_id = project;
    }
    if params.unassign {
        issue.member_id = None;
    } else if let Some(assignee) = params.assignee {
        issue.member_id = Some(assignee);
    }

    // A stored due date may already be past; only a new one is checked.
    let today = match params.due.as_deref() {
        Some(due) => {
            issue.due_date = parse_date(due, "due")?;
            Some(Utc::now().date_naive())
        }
        None => None,
    };

    check_issue(&issue, today)?;
    ctx.db.save_issue(&mut issue).await?;
    output(&issue, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && params.priority.is_none()
        && params.status.is_none()
        && params.due.is_none()
        && params.project.is_none()
        && params.assignee.is_none()
        && !params.unassign
    {
        anyhow::bail!(
            "At least one of --title, --description, --priority, --status, --due, --project, --assignee, or --unassign must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Params, validate_update_params};

    fn empty() -> Params {
        Params {
            id: 1,
            title: None,
            description: None,
            priority: None,
            status: None,
            due: None,
            project: None,
            assignee: None,
            unassign: false,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&empty()).is_err());
    }

    #[test]
    fn unassign_alone_is_an_update() {
        let params = Params {
            unassign: true,
            ..empty()
        };
        assert!(validate_update_params(&params).is_ok());
    }
}
