//! Schema initialization.
//!
//! Embeds the SQL migration file at compile time. All statements use
//! `IF NOT EXISTS`, so re-running against an existing store is a no-op.

use std::sync::atomic::Ordering;

use crate::BugFlowDb;
use crate::error::DatabaseError;

/// Initial schema: 4 tables, 4 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl BugFlowDb {
    /// Make the store usable: foreign-key enforcement on, tables present.
    ///
    /// Every store operation calls this first. The first caller does the work
    /// while holding the init gate; concurrent callers wait on the gate and
    /// then see the finished flag. After success the flag short-circuits
    /// without touching the gate. A failed attempt leaves the flag unset so
    /// the next call tries again.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if the pragma or the schema batch fails.
    pub async fn ensure_ready(&self) -> Result<(), DatabaseError> {
        if self.initialized.load(Ordering::Acquire) {
            return Ok(());
        }

        let _gate = self.init_gate.lock().await;
        if self.initialized.load(Ordering::Acquire) {
            return Ok(());
        }

        self.init_runs.fetch_add(1, Ordering::Relaxed);

        // Foreign keys are per-connection in SQLite.
        self.conn
            .execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        self.run_migrations().await?;

        self.initialized.store(true, Ordering::Release);
        tracing::debug!(path = %self.path, "schema ready");
        Ok(())
    }

    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
