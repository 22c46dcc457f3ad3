//! Store-level introspection: row counts, pragma state, table listing.

use bf_core::entities::Entity;

use crate::BugFlowDb;
use crate::error::DatabaseError;
use crate::helpers::entity_kind_to_table;

impl BugFlowDb {
    /// Number of stored rows of entity type `E`.
    pub async fn count<E: Entity>(&self) -> Result<u64, DatabaseError> {
        self.ensure_ready().await?;
        let table = entity_kind_to_table(E::KIND);
        let mut rows = self
            .conn()
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }

    /// Whether foreign-key enforcement is on for this connection.
    pub async fn foreign_keys_enabled(&self) -> Result<bool, DatabaseError> {
        self.ensure_ready().await?;
        let mut rows = self.conn().query("PRAGMA foreign_keys", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)? == 1)
    }

    /// Names of the user tables, alphabetical.
    pub async fn table_names(&self) -> Result<Vec<String>, DatabaseError> {
        self.ensure_ready().await?;
        let mut rows = self
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
                (),
            )
            .await?;
        let mut names = Vec::new();
        while let Some(row) = rows.next().await? {
            names.push(row.get::<String>(0)?);
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use bf_core::entities::{Comment, Issue, Member, Project};
    use pretty_assertions::assert_eq;

    use crate::test_support::{saved_issue, saved_member, saved_project, test_db};

    #[tokio::test]
    async fn counts_per_entity() {
        let db = test_db().await;
        let project = saved_project(&db, "P").await;
        saved_member(&db, "A B").await;
        saved_member(&db, "C D").await;
        saved_issue(&db, "I", &project, None).await;

        assert_eq!(db.count::<Project>().await.unwrap(), 1);
        assert_eq!(db.count::<Member>().await.unwrap(), 2);
        assert_eq!(db.count::<Issue>().await.unwrap(), 1);
        assert_eq!(db.count::<Comment>().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn table_names_are_sorted() {
        let db = test_db().await;
        assert_eq!(
            db.table_names().await.unwrap(),
            ["comments", "issues", "members", "projects"]
        );
    }
}
