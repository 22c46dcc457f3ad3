mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `bugflow project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List => list::run(ctx, flags).await,
        ProjectCommands::Get { id, tree } => get::run(*id, *tree, ctx, flags).await,
        ProjectCommands::Create {
            name,
            description,
            start,
            deadline,
            status,
        } => {
            create::run(
                create::Params {
                    name: name.clone(),
                    description: description.clone(),
                    start: start.clone(),
                    deadline: deadline.clone(),
                    status: status.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            start,
            deadline,
            status,
        } => {
            update::run(
                update::Params {
                    id: *id,
                    name: name.clone(),
                    description: description.clone(),
                    start: start.clone(),
                    deadline: deadline.clone(),
                    status: status.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        ProjectCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
