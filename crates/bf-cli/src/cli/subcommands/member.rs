use clap::Subcommand;

/// Team member commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MemberCommands {
    /// List all members.
    List,
    /// Get a member by ID.
    Get { id: i64 },
    /// Create a member.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        seniority: Option<String>,
    },
    /// Update a member.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        seniority: Option<String>,
    },
    /// Delete a member; their comments go too, their issues become unassigned.
    Delete { id: i64 },
}
