use bf_core::entities::Member;
use bf_core::presentation::initials;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// A member plus the avatar initials shown next to their name.
#[derive(Debug, Serialize)]
struct MemberRow {
    #[serde(flatten)]
    member: Member,
    initials: String,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx
        .db
        .list_members()
        .await?
        .into_iter()
        .map(|member| MemberRow {
            initials: initials(&member.full_name),
            member,
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
