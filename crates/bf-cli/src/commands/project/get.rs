use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_project;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, tree: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if tree {
        let tree = ctx
            .db
            .get_project_with_children(id)
            .await?
            .with_context(|| format!("project {id} not found"))?;
        return output(&tree, flags.format);
    }

    let project = require_project(&ctx.db, id).await?;
    output(&project, flags.format)
}
