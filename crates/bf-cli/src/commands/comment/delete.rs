use bf_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_comment;
use crate::commands::shared::response::Deleted;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let comment = require_comment(&ctx.db, id).await?;
    ctx.db.delete_comment(&comment).await?;
    output(
        &Deleted {
            deleted: EntityKind::Comment,
            id,
        },
        flags.format,
    )
}
