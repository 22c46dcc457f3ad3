mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::context::AppContext;

/// Handle `bugflow comment`.
pub async fn handle(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::List { issue } => list::run(*issue, ctx, flags).await,
        CommentCommands::Get { id } => get::run(*id, ctx, flags).await,
        CommentCommands::Create {
            text,
            author,
            issue,
        } => create::run(text, *author, *issue, ctx, flags).await,
        CommentCommands::Update { id, text } => update::run(*id, text, ctx, flags).await,
        CommentCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
