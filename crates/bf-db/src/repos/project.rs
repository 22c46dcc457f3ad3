//! Project repository.

use bf_core::entities::{IssueWithComments, Project, ProjectTree};
use bf_core::enums::EntityKind;

use crate::BugFlowDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_rows, format_date, parse_date, parse_enum};

const SELECT_COLS: &str = "id, name, description, start_date, deadline, status";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        description: row.get(2)?,
        start_date: parse_date(&row.get::<String>(3)?)?,
        deadline: parse_date(&row.get::<String>(4)?)?,
        status: parse_enum(&row.get::<String>(5)?)?,
    })
}

impl BugFlowDb {
    pub async fn list_projects(&self) -> Result<Vec<Project>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM projects ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_project).await
    }

    /// `Ok(None)` when no project has this identity.
    pub async fn get_project(&self, id: i64) -> Result<Option<Project>, DatabaseError> {
        self.ensure_ready().await?;
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM projects WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        rows.next().await?.as_ref().map(row_to_project).transpose()
    }

    /// Insert a transient project or update a stored one.
    ///
    /// On insert the new identity is written back into `project.id`.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if `project.id` names a row that no longer exists.
    pub async fn save_project(&self, project: &mut Project) -> Result<i64, DatabaseError> {
        self.ensure_ready().await?;
        let start = format_date(project.start_date);
        let deadline = format_date(project.deadline);

        if let Some(id) = project.id {
            let changed = self
                .conn()
                .execute(
                    "UPDATE projects SET name = ?1, description = ?2, start_date = ?3, deadline = ?4, status = ?5
                     WHERE id = ?6",
                    libsql::params![
                        project.name.as_str(),
                        project.description.as_str(),
                        start,
                        deadline,
                        project.status.as_str(),
                        id
                    ],
                )
                .await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: EntityKind::Project,
                    id,
                });
            }
            return Ok(id);
        }

        let id = self
            .insert_returning_id(
                "INSERT INTO projects (name, description, start_date, deadline, status)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![
                    project.name.as_str(),
                    project.description.as_str(),
                    start,
                    deadline,
                    project.status.as_str()
                ],
            )
            .await?;
        project.id = Some(id);
        Ok(id)
    }

    /// A project with its issues and each issue's comments.
    ///
    /// Built from the explicit per-pair fetches; `Ok(None)` if the project is missing.
    pub async fn get_project_with_children(
        &self,
        id: i64,
    ) -> Result<Option<ProjectTree>, DatabaseError> {
        let Some(project) = self.get_project(id).await? else {
            return Ok(None);
        };

        let mut issues = Vec::new();
        for issue in self.get_issues_by_project(id).await? {
            let comments = match issue.id {
                Some(issue_id) => self.get_comments_by_issue(issue_id).await?,
                None => Vec::new(),
            };
            issues.push(IssueWithComments { issue, comments });
        }

        Ok(Some(ProjectTree { project, issues }))
    }
}
