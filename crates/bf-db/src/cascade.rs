//! Delete procedures and the cascade/detach rules they discharge.
//!
//! - Project: each issue goes through the issue procedure, then the project row.
//! - Issue: its comments, then the issue row.
//! - Member: authored comments are deleted, assigned issues are unassigned,
//!   then the member row.
//!
//! The steps run as separate statements. A crash part-way through can leave
//! the children of a parent that still exists half-removed; it never leaves a
//! reference to a deleted row, because children always go first.
//!
//! Deleting a transient entity or an identity with no row is a no-op.

use bf_core::entities::{Comment, Issue, Member, Project};
use bf_core::enums::EntityKind;

use crate::BugFlowDb;
use crate::error::DatabaseError;
use crate::helpers::entity_kind_to_table;

impl BugFlowDb {
    async fn delete_row(&self, kind: EntityKind, id: i64) -> Result<u64, DatabaseError> {
        let table = entity_kind_to_table(kind);
        Ok(self
            .conn()
            .execute(&format!("DELETE FROM {table} WHERE id = ?1"), libsql::params![id])
            .await?)
    }

    pub async fn delete_comment(&self, comment: &Comment) -> Result<(), DatabaseError> {
        self.ensure_ready().await?;
        if let Some(id) = comment.id {
            self.delete_row(EntityKind::Comment, id).await?;
        }
        Ok(())
    }

    /// Delete an issue and every comment on it.
    pub async fn delete_issue(&self, issue: &Issue) -> Result<(), DatabaseError> {
        self.ensure_ready().await?;
        let Some(id) = issue.id else {
            return Ok(());
        };

        let comments = self.get_comments_by_issue(id).await?;
        for comment in &comments {
            self.delete_comment(comment).await?;
        }
        self.delete_row(EntityKind::Issue, id).await?;

        tracing::debug!(issue_id = id, comments = comments.len(), "issue deleted");
        Ok(())
    }

    /// Delete a project, its issues, and their comments.
    pub async fn delete_project(&self, project: &Project) -> Result<(), DatabaseError> {
        self.ensure_ready().await?;
        let Some(id) = project.id else {
            return Ok(());
        };

        let issues = self.get_issues_by_project(id).await?;
        for issue in &issues {
            self.delete_issue(issue).await?;
        }
        self.delete_row(EntityKind::Project, id).await?;

        tracing::debug!(project_id = id, issues = issues.len(), "project deleted");
        Ok(())
    }

    /// Delete a member and their comments. Issues assigned to them are kept
    /// and become unassigned.
    pub async fn delete_member(&self, member: &Member) -> Result<(), DatabaseError> {
        self.ensure_ready().await?;
        let Some(id) = member.id else {
            return Ok(());
        };

        let comments = self.get_comments_by_author(id).await?;
        for comment in &comments {
            self.delete_comment(comment).await?;
        }

        let mut assigned = self.get_issues_by_member(id).await?;
        for issue in &mut assigned {
            issue.member_id = None;
            self.save_issue(issue).await?;
        }

        self.delete_row(EntityKind::Member, id).await?;

        tracing::debug!(
            member_id = id,
            comments = comments.len(),
            unassigned = assigned.len(),
            "member deleted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{saved_comment, saved_issue, saved_member, saved_project, test_db};

    #[tokio::test]
    async fn deleting_issue_removes_its_comments_only() {
        let db = test_db().await;
        let project = saved_project(&db, "Tracker").await;
        let member = saved_member(&db, "Maria Ionescu").await;
        let doomed = saved_issue(&db, "Doomed", &project, None).await;
        let kept = saved_issue(&db, "Kept", &project, None).await;
        saved_comment(&db, "a", &member, &doomed).await;
        saved_comment(&db, "b", &member, &doomed).await;
        let survivor = saved_comment(&db, "c", &member, &kept).await;

        db.delete_issue(&doomed).await.unwrap();

        assert!(db.get_issue(doomed.id.unwrap()).await.unwrap().is_none());
        assert_eq!(db.list_comments().await.unwrap(), vec![survivor]);
        assert_eq!(db.count::<Issue>().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deleting_project_cascades_two_levels() {
        let db = test_db().await;
        let project = saved_project(&db, "Doomed").await;
        let other = saved_project(&db, "Kept").await;
        let member = saved_member(&db, "Maria Ionescu").await;
        for title in ["one", "two", "three"] {
            let issue = saved_issue(&db, title, &project, Some(&member)).await;
            saved_comment(&db, "x", &member, &issue).await;
            saved_comment(&db, "y", &member, &issue).await;
        }
        let kept_issue = saved_issue(&db, "elsewhere", &other, None).await;
        saved_comment(&db, "z", &member, &kept_issue).await;

        db.delete_project(&project).await.unwrap();

        assert!(db.get_project(project.id.unwrap()).await.unwrap().is_none());
        assert_eq!(db.count::<Project>().await.unwrap(), 1);
        assert_eq!(db.count::<Issue>().await.unwrap(), 1);
        assert_eq!(db.count::<Comment>().await.unwrap(), 1);
        assert_eq!(db.count::<Member>().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deleting_member_detaches_issues_and_drops_comments() {
        let db = test_db().await;
        let project = saved_project(&db, "Tracker").await;
        let leaving = saved_member(&db, "Ion Vasile").await;
        let staying = saved_member(&db, "Elena Dumitrescu").await;
        let assigned = saved_issue(&db, "Assigned", &project, Some(&leaving)).await;
        let theirs = saved_issue(&db, "Other", &project, Some(&staying)).await;
        saved_comment(&db, "by leaving", &leaving, &theirs).await;
        let kept = saved_comment(&db, "by staying", &staying, &assigned).await;

        db.delete_member(&leaving).await.unwrap();

        assert!(db.get_member(leaving.id.unwrap()).await.unwrap().is_none());
        let detached = db.get_issue(assigned.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(detached.member_id, None);
        assert_eq!(detached.title, "Assigned");
        assert_eq!(
            db.get_issue(theirs.id.unwrap()).await.unwrap().unwrap().member_id,
            staying.id
        );
        assert_eq!(db.list_comments().await.unwrap(), vec![kept]);
        assert_eq!(db.count::<Issue>().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn deleting_missing_rows_is_a_no_op() {
        let db = test_db().await;
        let project = saved_project(&db, "Tracker").await;

        db.delete_project(&Project::new("never saved")).await.unwrap();
        db.delete_issue(&Issue {
            id: Some(77),
            ..Issue::new("ghost", project.id.unwrap())
        })
        .await
        .unwrap();
        db.delete_member(&Member {
            id: Some(5),
            ..Member::new("Ghost", "ghost@bugflow.test")
        })
        .await
        .unwrap();

        assert_eq!(db.count::<Project>().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deleting_twice_is_harmless() {
        let db = test_db().await;
        let project = saved_project(&db, "Tracker").await;
        let issue = saved_issue(&db, "Once", &project, None).await;

        db.delete_issue(&issue).await.unwrap();
        db.delete_issue(&issue).await.unwrap();
        assert_eq!(db.count::<Issue>().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn schema_rejects_raw_dangling_insert() {
        let db = test_db().await;
        db.ensure_ready().await.unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO issues (title, due_date, project_id) VALUES ('raw', '2030-01-01', 999)",
                (),
            )
            .await;
        assert!(result.is_err(), "foreign keys should be enforced");
    }
}
