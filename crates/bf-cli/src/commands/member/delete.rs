use bf_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_member;
use crate::commands::shared::response::Deleted;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let member = require_member(&ctx.db, id).await?;
    ctx.db.delete_member(&member).await?;
    output(
        &Deleted {
            deleted: EntityKind::Member,
            id,
        },
        flags.format,
    )
}
