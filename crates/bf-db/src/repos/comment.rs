//! Comment repository.

use bf_core::entities::Comment;
use bf_core::enums::EntityKind;

use crate::BugFlowDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_rows, parse_datetime};

const SELECT_COLS: &str = "id, text, created_at, author_id, issue_id";

fn row_to_comment(row: &libsql::Row) -> Result<Comment, DatabaseError> {
    Ok(Comment {
        id: Some(row.get(0)?),
        text: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
        author_id: row.get(3)?,
        issue_id: row.get(4)?,
    })
}

impl BugFlowDb {
    pub async fn list_comments(&self) -> Result<Vec<Comment>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM comments ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_comment).await
    }

    pub async fn get_comment(&self, id: i64) -> Result<Option<Comment>, DatabaseError> {
        self.ensure_ready().await?;
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM comments WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        rows.next().await?.as_ref().map(row_to_comment).transpose()
    }

    /// Comments on one issue, oldest first.
    pub async fn get_comments_by_issue(&self, issue_id: i64) -> Result<Vec<Comment>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM comments WHERE issue_id = ?1 ORDER BY id"),
                libsql::params![issue_id],
            )
            .await?;
        collect_rows(rows, row_to_comment).await
    }

    pub async fn get_comments_by_author(
        &self,
        author_id: i64,
    ) -> Result<Vec<Comment>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM comments WHERE author_id = ?1 ORDER BY id"),
                libsql::params![author_id],
            )
            .await?;
        collect_rows(rows, row_to_comment).await
    }

    /// Insert or update a comment after checking its author and issue.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::Reference` if either reference is non-positive or dangling.
    /// - `DatabaseError::NotFound` if `comment.id` names a row that no longer exists.
    pub async fn save_comment(&self, comment: &mut Comment) -> Result<i64, DatabaseError> {
        self.ensure_ready().await?;
        self.validate_comment_references(comment).await?;
        let created = comment.created_at.to_rfc3339();

        if let Some(id) = comment.id {
            let changed = self
                .conn()
                .execute(
                    "UPDATE comments SET text = ?1, created_at = ?2, author_id = ?3, issue_id = ?4 WHERE id = ?5",
                    libsql::params![
                        comment.text.as_str(),
                        created,
                        comment.author_id,
                        comment.issue_id,
                        id
                    ],
                )
                .await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: EntityKind::Comment,
                    id,
                });
            }
            return Ok(id);
        }

        let id = self
            .insert_returning_id(
                "INSERT INTO comments (text, created_at, author_id, issue_id) VALUES (?1, ?2, ?3, ?4) RETURNING id",
                libsql::params![
                    comment.text.as_str(),
                    created,
                    comment.author_id,
                    comment.issue_id
                ],
            )
            .await?;
        comment.id = Some(id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{saved_comment, saved_issue, saved_member, saved_project, test_db};

    #[tokio::test]
    async fn comment_crud_roundtrip() {
        let db = test_db().await;
        let project = saved_project(&db, "Tracker").await;
        let author = saved_member(&db, "Maria Ionescu").await;
        let issue = saved_issue(&db, "Crash", &project, None).await;

        let mut comment = Comment {
            created_at: Utc.with_ymd_and_hms(2030, 2, 10, 9, 30, 0).unwrap(),
            ..Comment::new("Reproduced on Android 14", author.id.unwrap(), issue.id.unwrap())
        };
        let id = db.save_comment(&mut comment).await.unwrap();
        assert_eq!(db.get_comment(id).await.unwrap().unwrap(), comment);

        comment.text = "Reproduced on Android 14 and 15".into();
        db.save_comment(&mut comment).await.unwrap();
        assert_eq!(
            db.get_comment(id).await.unwrap().unwrap().text,
            "Reproduced on Android 14 and 15"
        );
    }

    #[tokio::test]
    async fn comments_filter_by_issue_and_author() {
        let db = test_db().await;
        let project = saved_project(&db, "Tracker").await;
        let maria = saved_member(&db, "Maria Ionescu").await;
        let radu = saved_member(&db, "Radu Stan").await;
        let crash = saved_issue(&db, "Crash", &project, None).await;
        let typo = saved_issue(&db, "Typo", &project, None).await;

        saved_comment(&db, "m1", &maria, &crash).await;
        saved_comment(&db, "r1", &radu, &crash).await;
        saved_comment(&db, "m2", &maria, &typo).await;

        let on_crash: Vec<_> = db
            .get_comments_by_issue(crash.id.unwrap())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(on_crash, ["m1", "r1"]);

        let by_maria: Vec<_> = db
            .get_comments_by_author(maria.id.unwrap())
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(by_maria, ["m1", "m2"]);
        assert_eq!(db.list_comments().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn moving_comment_to_missing_issue_is_rejected() {
        let db = test_db().await;
        let project = saved_project(&db, "Tracker").await;
        let author = saved_member(&db, "Maria Ionescu").await;
        let issue = saved_issue(&db, "Crash", &project, None).await;
        let mut comment = saved_comment(&db, "hello", &author, &issue).await;

        comment.issue_id = 4242;
        assert!(db.save_comment(&mut comment).await.unwrap_err().as_reference().is_some());
        assert_eq!(
            db.get_comment(comment.id.unwrap()).await.unwrap().unwrap().issue_id,
            issue.id.unwrap()
        );
    }
}
