mod comment;
mod issue;
mod member;
mod project;

pub use comment::CommentCommands;
pub use issue::IssueCommands;
pub use member::MemberCommands;
pub use project::ProjectCommands;
