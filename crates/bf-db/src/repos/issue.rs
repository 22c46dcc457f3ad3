//! Issue repository.
//!
//! Writes go through the reference checks in `crate::validate` first.

use bf_core::entities::{Issue, IssueWithComments};
use bf_core::enums::EntityKind;

use crate::BugFlowDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_rows, format_date, parse_date, parse_enum};

const SELECT_COLS: &str =
    "id, title, description, priority, status, due_date, project_id, member_id";

fn row_to_issue(row: &libsql::Row) -> Result<Issue, DatabaseError> {
    Ok(Issue {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        priority: parse_enum(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        due_date: parse_date(&row.get::<String>(5)?)?,
        project_id: row.get(6)?,
        member_id: row.get::<Option<i64>>(7)?,
    })
}

impl BugFlowDb {
    pub async fn list_issues(&self) -> Result<Vec<Issue>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM issues ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_issue).await
    }

    pub async fn get_issue(&self, id: i64) -> Result<Option<Issue>, DatabaseError> {
        self.ensure_ready().await?;
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM issues WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        rows.next().await?.as_ref().map(row_to_issue).transpose()
    }

    /// Issues filed against a project. Empty for an unknown project.
    pub async fn get_issues_by_project(&self, project_id: i64) -> Result<Vec<Issue>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM issues WHERE project_id = ?1 ORDER BY id"),
                libsql::params![project_id],
            )
            .await?;
        collect_rows(rows, row_to_issue).await
    }

    /// Issues currently assigned to a member.
    pub async fn get_issues_by_member(&self, member_id: i64) -> Result<Vec<Issue>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM issues WHERE member_id = ?1 ORDER BY id"),
                libsql::params![member_id],
            )
            .await?;
        collect_rows(rows, row_to_issue).await
    }

    /// Insert or update an issue after checking its project and assignee.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::Reference` if `project_id` or `member_id` is non-positive
    ///   or names no row. Nothing is written.
    /// - `DatabaseError::NotFound` if `issue.id` names a row that no longer exists.
    pub async fn save_issue(&self, issue: &mut Issue) -> Result<i64, DatabaseError> {
        self.ensure_ready().await?;
        self.validate_issue_references(issue).await?;
        let due = format_date(issue.due_date);

        if let Some(id) = issue.id {
            let changed = self
                .conn()
                .execute(
                    "UPDATE issues SET title = ?1, description = ?2, priority = ?3, status = ?4,
                     due_date = ?5, project_id = ?6, member_id = ?7
                     WHERE id = ?8",
                    libsql::params![
                        issue.title.as_str(),
                        issue.description.as_str(),
                        issue.priority.as_str(),
                        issue.status.as_str(),
                        due,
                        issue.project_id,
                        issue.member_id,
                        id
                    ],
                )
                .await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: EntityKind::Issue,
                    id,
                });
            }
            return Ok(id);
        }

        let id = self
            .insert_returning_id(
                "INSERT INTO issues (title, description, priority, status, due_date, project_id, member_id)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
                libsql::params![
                    issue.title.as_str(),
                    issue.description.as_str(),
                    issue.priority.as_str(),
                    issue.status.as_str(),
                    due,
                    issue.project_id,
                    issue.member_id
                ],
            )
            .await?;
        issue.id = Some(id);
        Ok(id)
    }

    pub async fn get_issue_with_comments(
        &self,
        id: i64,
    ) -> Result<Option<IssueWithComments>, DatabaseError> {
        let Some(issue) = self.get_issue(id).await? else {
            return Ok(None);
        };
        let comments = self.get_comments_by_issue(id).await?;
        Ok(Some(IssueWithComments { issue, comments }))
    }
}
