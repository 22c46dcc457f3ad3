use clap::Subcommand;

/// Comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// List comments, optionally for one issue.
    List {
        #[arg(long)]
        issue: Option<i64>,
    },
    /// Get a comment by ID.
    Get { id: i64 },
    /// Post a comment.
    Create {
        #[arg(long)]
        text: String,
        /// Authoring member ID.
        #[arg(long)]
        author: i64,
        /// Issue ID.
        #[arg(long)]
        issue: i64,
    },
    /// Edit a comment's text.
    Update {
        id: i64,
        #[arg(long)]
        text: String,
    },
    /// Delete a comment.
    Delete { id: i64 },
}
