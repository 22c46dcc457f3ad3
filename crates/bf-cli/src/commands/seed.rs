use std::path::PathBuf;

use bf_db::seed::SeedOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeedArgs;
use crate::context::{AppContext, seed_document};
use crate::output::output;

/// Handle `bugflow seed`.
pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = args
        .file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| ctx.config.seed.file_path());
    let doc = seed_document(path.as_deref())?;

    let outcome = ctx.seeder.seed_if_empty(&ctx.db, &doc).await?;
    if outcome == SeedOutcome::AlreadyPopulated && !flags.quiet {
        eprintln!("store already has projects; nothing seeded");
    }
    output(&outcome, flags.format)
}
