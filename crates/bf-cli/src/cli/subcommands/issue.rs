use clap::Subcommand;

/// Issue entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum IssueCommands {
    /// List issues.
    List {
        /// Only issues of this project.
        #[arg(long)]
        project: Option<i64>,
        /// Only issues assigned to this member.
        #[arg(long)]
        member: Option<i64>,
    },
    /// Get an issue by ID.
    Get {
        id: i64,
        /// Include the issue's comments.
        #[arg(long)]
        comments: bool,
    },
    /// Create an issue.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        project: i64,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Due date (YYYY-MM-DD), default 7 days from today
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        assignee: Option<i64>,
    },
    /// Update an issue.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        project: Option<i64>,
        #[arg(long, conflicts_with = "unassign")]
        assignee: Option<i64>,
        /// Clear the assignee.
        #[arg(long)]
        unassign: bool,
    },
    /// Delete an issue and its comments.
    Delete { id: i64 },
}
