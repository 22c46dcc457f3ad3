use clap::Subcommand;

/// Project entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List all projects.
    List,
    /// Get a project by ID.
    Get {
        id: i64,
        /// Include issues and their comments.
        #[arg(long)]
        tree: bool,
    },
    /// Create a project.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Start date (YYYY-MM-DD), default today
        #[arg(long)]
        start: Option<String>,
        /// Deadline (YYYY-MM-DD), default 30 days after start
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Update a project.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a project with its issues and their comments.
    Delete { id: i64 },
}
