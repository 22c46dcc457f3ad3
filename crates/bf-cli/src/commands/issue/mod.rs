mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IssueCommands;
use crate::context::AppContext;

/// Handle `bugflow issue`.
pub async fn handle(
    action: &IssueCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        IssueCommands::List { project, member } => list::run(*project, *member, ctx, flags).await,
        IssueCommands::Get { id, comments } => get::run(*id, *comments, ctx, flags).await,
        IssueCommands::Create {
            title,
            project,
            description,
            priority,
            status,
            due,
            assignee,
        } => {
            create::run(
                create::Params {
                    title: title.clone(),
                    project: *project,
                    description: description.clone(),
                    priority: priority.clone(),
                    status: status.clone(),
                    due: due.clone(),
                    assignee: *assignee,
                },
                ctx,
                flags,
            )
            .await
        }
        IssueCommands::Update {
            id,
            title,
            description,
            priority,
            status,
            due,
            project,
            assignee,
            unassign,
        } => {
            update::run(
                update::Params {
                    id: *id,
                    title: title.clone(),
                    description: description.clone(),
                    priority: priority.clone(),
                    status: status.clone(),
                    due: due.clone(),
                    project: *project,
                    assignee: *assignee,
                    unassign: *unassign,
                },
                ctx,
                flags,
            )
            .await
        }
        IssueCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
