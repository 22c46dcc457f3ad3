use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Member { action } => commands::member::handle(&action, ctx, flags).await,
        Commands::Issue { action } => commands::issue::handle(&action, ctx, flags).await,
        Commands::Comment { action } => commands::comment::handle(&action, ctx, flags).await,
        Commands::Report => commands::report::handle(ctx, flags).await,
        Commands::Seed(args) => commands::seed::handle(&args, ctx, flags).await,
        Commands::Info => commands::info::handle(ctx, flags).await,
        Commands::Schema => commands::schema::handle(flags),
    }
}
