use bf_db::seed::SeedDocument;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `bugflow schema`. Needs no store.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(SeedDocument);
    output(&schema, flags.format)
}
