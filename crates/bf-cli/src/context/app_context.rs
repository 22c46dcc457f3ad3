use std::path::{Path, PathBuf};

use anyhow::Context;
use bf_config::BugFlowConfig;
use bf_db::BugFlowDb;
use bf_db::seed::{SeedDocument, Seeder};

/// Shared application resources initialized once at startup.
///
/// Holds the single store handle for the process and the seeder that guards
/// one-time population of it.
pub struct AppContext {
    pub db: BugFlowDb,
    pub seeder: Seeder,
    pub config: BugFlowConfig,
}

impl AppContext {
    /// Open the configured store (or `db_override`) and run startup seeding
    /// if `seed.on_startup` is set.
    pub async fn init(config: BugFlowConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let db_path = db_override.map_or_else(|| config.database.resolved_path(), PathBuf::from);

        let db = BugFlowDb::open(&db_path)
            .await
            .with_context(|| format!("failed to open store at {}", db_path.display()))?;

        let ctx = Self {
            db,
            seeder: Seeder::new(),
            config,
        };

        if ctx.config.seed.on_startup {
            let doc = seed_document(ctx.config.seed.file_path().as_deref())?;
            let outcome = ctx
                .seeder
                .seed_if_empty(&ctx.db, &doc)
                .await
                .context("startup seeding failed")?;
            tracing::debug!(?outcome, "startup seed");
        }

        Ok(ctx)
    }
}

/// The seed document at `path`, or the built-in demo data.
pub fn seed_document(path: Option<&Path>) -> anyhow::Result<SeedDocument> {
    match path {
        Some(path) => SeedDocument::from_file(path)
            .with_context(|| format!("failed to load seed document {}", path.display())),
        None => SeedDocument::builtin().context("built-in seed document is invalid"),
    }
}
