use bf_core::entities::Project;
use bf_core::enums::ProjectStatus;
use chrono::Days;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum_or};
use crate::commands::shared::rules::check_project;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub name: String,
    pub description: Option<String>,
    pub start: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut project = build_project(params)?;
    check_project(&project)?;
    ctx.db.save_project(&mut project).await?;
    output(&project, flags.format)
}

fn build_project(params: Params) -> anyhow::Result<Project> {
    let mut project = Project::new(params.name);
    if let Some(description) = params.description {
        project.description = description;
    }
    if let Some(start) = params.start.as_deref() {
        project.start_date = parse_date(start, "start")?;
        project.deadline = project.start_date + Days::new(Project::DEFAULT_DEADLINE_DAYS);
    }
    if let Some(deadline) = params.deadline.as_deref() {
        project.deadline = parse_date(deadline, "deadline")?;
    }
    project.status = parse_enum_or::<ProjectStatus>(params.status.as_deref(), "status", project.status)?;
    Ok(project)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn params(name: &str) -> Params {
        Params {
            name: name.to_string(),
            description: None,
            start: None,
            deadline: None,
            status: None,
        }
    }

    #[test]
    fn deadline_follows_explicit_start() {
        let project = build_project(Params {
            start: Some("2030-01-10".into()),
            ..params("Tracker")
        })
        .unwrap();
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2030, 1, 10).unwrap());
        assert_eq!(project.deadline, NaiveDate::from_ymd_opt(2030, 2, 9).unwrap());
        assert_eq!(project.status, ProjectStatus::Active);
    }

    #[test]
    fn explicit_fields_are_applied() {
        let project = build_project(Params {
            description: Some("desc".into()),
            start: Some("2030-01-10".into()),
            deadline: Some("2030-06-30".into()),
            status: Some("inactive".into()),
            ..params("Tracker")
        })
        .unwrap();
        assert_eq!(project.description, "desc");
        assert_eq!(project.deadline, NaiveDate::from_ymd_opt(2030, 6, 30).unwrap());
        assert_eq!(project.status, ProjectStatus::Inactive);
    }

    #[test]
    fn bad_status_is_rejected() {
        let result = build_project(Params {
            status: Some("archived".into()),
            ..params("Tracker")
        });
        assert!(result.is_err());
    }
}
