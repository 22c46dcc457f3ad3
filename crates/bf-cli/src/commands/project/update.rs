use bf_core::enums::ProjectStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_project;
use crate::commands::shared::parse::{parse_date, parse_enum_or};
use crate::commands::shared::rules::check_project;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let mut project = require_project(&ctx.db, params.id).await?;

    if let Some(name) = params.name {
        project.name = name;
    }
    if let Some(description) = params.description {
        project.description = description;
    }
    if let Some(start) = params.start.as_deref() {
        project.start_date = parse_date(start, "start")?;
    }
    if let Some(deadline) = params.deadline.as_deref() {
        project.deadline = parse_date(deadline, "deadline")?;
    }
    project.status = parse_enum_or::<ProjectStatus>(params.status.as_deref(), "status", project.status)?;

    check_project(&project)?;
    ctx.db.save_project(&mut project).await?;
    output(&project, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.name.is_none()
        && params.description.is_none()
        && params.start.is_none()
        && params.deadline.is_none()
        && params.status.is_none()
    {
        anyhow::bail!(
            "At least one of --name, --description, --start, --deadline, or --status must be provided"
        );
    }
    Ok(())
}
