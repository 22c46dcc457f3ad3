use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Comment, Issue, Project};

/// An issue together with every comment posted on it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IssueWithComments {
    pub issue: Issue,
    pub comments: Vec<Comment>,
}

/// A project with its issues, each carrying its comments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectTree {
    pub project: Project,
    pub issues: Vec<IssueWithComments>,
}

impl ProjectTree {
    /// Total number of comments across all issues of the project.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.issues.iter().map(|i| i.comments.len()).sum()
    }
}
