use bf_core::entities::{Comment, Issue, Member, Project};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StoreInfo {
    path: String,
    foreign_keys: bool,
    tables: Vec<String>,
    counts: EntityCounts,
}

#[derive(Debug, Serialize)]
struct EntityCounts {
    projects: u64,
    members: u64,
    issues: u64,
    comments: u64,
}

/// Handle `bugflow info`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let db = &ctx.db;
    let info = StoreInfo {
        path: db.path().to_string(),
        foreign_keys: db.foreign_keys_enabled().await?,
        tables: db.table_names().await?,
        counts: EntityCounts {
            projects: db.count::<Project>().await?,
            members: db.count::<Member>().await?,
            issues: db.count::<Issue>().await?,
            comments: db.count::<Comment>().await?,
        },
    };
    output(&info, flags.format)
}
