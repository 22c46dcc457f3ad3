//! Member repository.

use bf_core::entities::Member;
use bf_core::enums::EntityKind;

use crate::BugFlowDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_rows, parse_enum};

const SELECT_COLS: &str = "id, full_name, email, role, seniority";

fn row_to_member(row: &libsql::Row) -> Result<Member, DatabaseError> {
    Ok(Member {
        id: Some(row.get(0)?),
        full_name: row.get(1)?,
        email: row.get(2)?,
        role: parse_enum(&row.get::<String>(3)?)?,
        seniority: parse_enum(&row.get::<String>(4)?)?,
    })
}

impl BugFlowDb {
    pub async fn list_members(&self) -> Result<Vec<Member>, DatabaseError> {
        self.ensure_ready().await?;
        let rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM members ORDER BY id"), ())
            .await?;
        collect_rows(rows, row_to_member).await
    }

    pub async fn get_member(&self, id: i64) -> Result<Option<Member>, DatabaseError> {
        self.ensure_ready().await?;
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM members WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        rows.next().await?.as_ref().map(row_to_member).transpose()
    }

    /// Insert or update; see [`BugFlowDb::save_project`] for the identity rules.
    pub async fn save_member(&self, member: &mut Member) -> Result<i64, DatabaseError> {
        self.ensure_ready().await?;

        if let Some(id) = member.id {
            let changed = self
                .conn()
                .execute(
                    "UPDATE members SET full_name = ?1, email = ?2, role = ?3, seniority = ?4 WHERE id = ?5",
                    libsql::params![
                        member.full_name.as_str(),
                        member.email.as_str(),
                        member.role.as_str(),
                        member.seniority.as_str(),
                        id
                    ],
                )
                .await?;
            if changed == 0 {
                return Err(DatabaseError::NotFound {
                    entity: EntityKind::Member,
                    id,
                });
            }
            return Ok(id);
        }

        let id = self
            .insert_returning_id(
                "INSERT INTO members (full_name, email, role, seniority) VALUES (?1, ?2, ?3, ?4) RETURNING id",
                libsql::params![
                    member.full_name.as_str(),
                    member.email.as_str(),
                    member.role.as_str(),
                    member.seniority.as_str()
                ],
            )
            .await?;
        member.id = Some(id);
        Ok(id)
    }
}
