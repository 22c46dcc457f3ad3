use bf_core::entities::Member;
use bf_core::enums::{Role, Seniority};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum_or;
use crate::commands::shared::rules::check_member;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    email: &str,
    role: Option<&str>,
    seniority: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut member = Member::new(name.trim(), email.trim());
    member.role = parse_enum_or::<Role>(role, "role", member.role)?;
    member.seniority = parse_enum_or::<Seniority>(seniority, "seniority", member.seniority)?;

    check_member(&member)?;
    ctx.db.save_member(&mut member).await?;
    output(&member, flags.format)
}
