use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A comment left by a member on an issue.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comment {
    pub id: Option<i64>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub author_id: i64,
    pub issue_id: i64,
}

impl Comment {
    #[must_use]
    pub fn new(text: impl Into<String>, author_id: i64, issue_id: i64) -> Self {
        Self {
            id: None,
            text: text.into(),
            created_at: Utc::now(),
            author_id,
            issue_id,
        }
    }
}
