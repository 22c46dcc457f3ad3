use bf_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_project;
use crate::commands::shared::response::Deleted;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = require_project(&ctx.db, id).await?;
    ctx.db.delete_project(&project).await?;
    output(
        &Deleted {
            deleted: EntityKind::Project,
            id,
        },
        flags.format,
    )
}
