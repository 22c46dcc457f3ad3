mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MemberCommands;
use crate::context::AppContext;

/// Handle `bugflow member`.
pub async fn handle(
    action: &MemberCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MemberCommands::List => list::run(ctx, flags).await,
        MemberCommands::Get { id } => get::run(*id, ctx, flags).await,
        MemberCommands::Create {
            name,
            email,
            role,
            seniority,
        } => {
            create::run(
                name,
                email,
                role.as_deref(),
                seniority.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        MemberCommands::Update {
            id,
            name,
            email,
            role,
            seniority,
        } => {
            update::run(
                update::Params {
                    id: *id,
                    name: name.clone(),
                    email: email.clone(),
                    role: role.clone(),
                    seniority: seniority.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        MemberCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
