use clap::{Args, Subcommand};

use crate::cli::subcommands::{CommentCommands, IssueCommands, MemberCommands, ProjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Team members.
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
    /// Issues.
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// Comments on issues.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Issue breakdown by status and priority.
    Report,
    /// Populate an empty store with demo or file data.
    Seed(SeedArgs),
    /// Print the JSON Schema of the seed document.
    Schema,
    /// Store location, foreign-key state, tables, and row counts.
    Info,
}

#[derive(Clone, Debug, Args)]
pub struct SeedArgs {
    /// Seed document to load instead of `seed.file` or the built-in demo data
    #[arg(long)]
    pub file: Option<String>,
}
