//! # bf-db
//!
//! libSQL persistence for BugFlow.
//!
//! Owns the single store connection and everything that touches it: lazy,
//! idempotent schema initialization, CRUD for projects, members, issues, and
//! comments, referential-integrity checks before writes, cascade and detach
//! rules on delete, explicit parent/child fetches, and one-time seeding.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local-file mode.

mod cascade;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod seed;
mod validate;

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize};

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;
use tokio::sync::Mutex;

/// Path that opens a private in-memory store.
pub const IN_MEMORY: &str = ":memory:";

/// Central handle for all BugFlow store operations.
///
/// One instance per backing file, shared by reference (or `Arc`) between all
/// callers. Opening does not touch the schema; the first operation does, via
/// [`BugFlowDb::ensure_ready`].
pub struct BugFlowDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    path: String,
    init_gate: Mutex<()>,
    initialized: AtomicBool,
    init_runs: AtomicUsize,
}

impl BugFlowDb {
    /// Open (creating if absent) the store file at `path`.
    ///
    /// Missing parent directories are created. Pass [`IN_MEMORY`] for a
    /// throwaway store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StoreUnavailable` if the directory cannot be
    /// created or the file cannot be opened.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let shown = path.to_string_lossy().into_owned();

        if shown != IN_MEMORY {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| DatabaseError::StoreUnavailable {
                    path: Some(shown.clone()),
                    reason: e.to_string(),
                })?;
            }
        }

        let unavailable = |e: libsql::Error| DatabaseError::StoreUnavailable {
            path: Some(shown.clone()),
            reason: e.to_string(),
        };
        let db = Builder::new_local(path).build().await.map_err(unavailable)?;
        let conn = db.connect().map_err(unavailable)?;

        tracing::debug!(path = %shown, "store opened");
        Ok(Self {
            db,
            conn,
            path: shown,
            init_gate: Mutex::new(()),
            initialized: AtomicBool::new(false),
            init_runs: AtomicUsize::new(0),
        })
    }

    /// Open a private in-memory store (tests, dry runs).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::StoreUnavailable` if libSQL cannot allocate it.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        Self::open(IN_MEMORY).await
    }

    /// Path this store was opened with.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Access the underlying libSQL connection for direct queries.
    ///
    /// Bypasses schema initialization and integrity checks.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run an `INSERT ... RETURNING id` and hand back the new identity.
    pub(crate) async fn insert_returning_id(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<i64, DatabaseError> {
        let mut rows = self.conn.query(sql, params).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    /// How many times schema initialization has actually run on this handle.
    #[cfg(test)]
    pub(crate) fn init_runs(&self) -> usize {
        self.init_runs.load(std::sync::atomic::Ordering::Relaxed)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use bf_core::entities::{Comment, Issue, Member, Project};

    use crate::BugFlowDb;

    /// Create an in-memory store.
    pub async fn test_db() -> BugFlowDb {
        BugFlowDb::open_in_memory().await.unwrap()
    }

    pub async fn saved_project(db: &BugFlowDb, name: &str) -> Project {
        let mut project = Project::new(name);
        db.save_project(&mut project).await.unwrap();
        project
    }

    pub async fn saved_member(db: &BugFlowDb, name: &str) -> Member {
        let email = format!("{}@bugflow.test", name.to_lowercase().replace(' ', "."));
        let mut member = Member::new(name, email);
        db.save_member(&mut member).await.unwrap();
        member
    }

    pub async fn saved_issue(
        db: &BugFlowDb,
        title: &str,
        project: &Project,
        assignee: Option<&Member>,
    ) -> Issue {
        let mut issue = Issue {
            member_id: assignee.and_then(|m| m.id),
            ..Issue::new(title, project.id.unwrap())
        };
        db.save_issue(&mut issue).await.unwrap();
        issue
    }

    pub async fn saved_comment(db: &BugFlowDb, text: &str, author: &Member, issue: &Issue) -> Comment {
        let mut comment = Comment::new(text, author.id.unwrap(), issue.id.unwrap());
        db.save_comment(&mut comment).await.unwrap();
        comment
    }
}
