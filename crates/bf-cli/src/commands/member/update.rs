use bf_core::enums::{Role, Seniority};

use crate::cli::GlobalFlags;
use crate::commands::shared::lookup::require_member;
use crate::commands::shared::parse::parse_enum_or;
use crate::commands::shared::rules::check_member;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub seniority: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if params.name.is_none()
        && params.email.is_none()
        && params.role.is_none()
        && params.seniority.is_none()
    {
        anyhow::bail!("At least one of --name, --email, --role, or --seniority must be provided");
    }

    let mut member = require_member(&ctx.db, params.id).await?;
    if let Some(name) = params.name {
        member.full_name = name.trim().to_string();
    }
    if let Some(email) = params.email {
        member.email = email.trim().to_string();
    }
    member.role = parse_enum_or::<Role>(params.role.as_deref(), "role", member.role)?;
    member.seniority =
        parse_enum_or::<Seniority>(params.seniority.as_deref(), "seniority", member.seniority)?;

    check_member(&member)?;
    ctx.db.save_member(&mut member).await?;
    output(&member, flags.format)
}
