use bf_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_issue;
use crate::commands::shared::response::Deleted;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let issue = require_issue(&ctx.db, id).await?;
    ctx.db.delete_issue(&issue).await?;
    output(
        &Deleted {
            deleted: EntityKind::Issue,
            id,
        },
        flags.format,
    )
}
