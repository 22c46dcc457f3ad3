//! Referential-integrity checks run before issue and comment writes.
//!
//! The schema declares the same references, but checking here first means the
//! caller gets a `ReferenceError` naming the field instead of a generic
//! constraint failure, and no write is attempted.

use bf_core::entities::{Comment, Issue};
use bf_core::enums::EntityKind;

use crate::BugFlowDb;
use crate::error::{DatabaseError, ReferenceError};
use crate::helpers::entity_kind_to_table;

impl BugFlowDb {
    /// Whether a row of `kind` with this identity exists.
    pub(crate) async fn exists(&self, kind: EntityKind, id: i64) -> Result<bool, DatabaseError> {
        let table = entity_kind_to_table(kind);
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT 1 FROM {table} WHERE id = ?1 LIMIT 1"),
                libsql::params![id],
            )
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Check one required or optional reference field.
    async fn check_reference(
        &self,
        owner: EntityKind,
        field: &'static str,
        target: EntityKind,
        id: i64,
    ) -> Result<(), DatabaseError> {
        if id <= 0 {
            return Err(ReferenceError::InvalidId { owner, field, id }.into());
        }
        if !self.exists(target, id).await? {
            return Err(ReferenceError::Dangling {
                owner,
                field,
                target,
                id,
            }
            .into());
        }
        Ok(())
    }

    /// The project must exist; the assignee, if any, must exist.
    pub(crate) async fn validate_issue_references(
        &self,
        issue: &Issue,
    ) -> Result<(), DatabaseError> {
        self.check_reference(
            EntityKind::Issue,
            "project_id",
            EntityKind::Project,
            issue.project_id,
        )
        .await?;

        if let Some(member_id) = issue.member_id {
            self.check_reference(EntityKind::Issue, "member_id", EntityKind::Member, member_id)
                .await?;
        }
        Ok(())
    }

    /// Both the author and the issue must exist.
    pub(crate) async fn validate_comment_references(
        &self,
        comment: &Comment,
    ) -> Result<(), DatabaseError> {
        self.check_reference(
            EntityKind::Comment,
            "author_id",
            EntityKind::Member,
            comment.author_id,
        )
        .await?;
        self.check_reference(
            EntityKind::Comment,
            "issue_id",
            EntityKind::Issue,
            comment.issue_id,
        )
        .await
    }
}
