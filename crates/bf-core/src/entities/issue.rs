use chrono::{Days, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IssueStatus, Priority};

/// An issue filed against exactly one project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Issue {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: IssueStatus,
    /// Estimated completion date.
    pub due_date: NaiveDate,
    pub project_id: i64,
    /// Assignee. `None` means unassigned.
    pub member_id: Option<i64>,
}

impl Issue {
    pub const DEFAULT_DUE_DAYS: u64 = 7;

    /// A transient, unassigned issue with medium priority, due in a week.
    #[must_use]
    pub fn new(title: impl Into<String>, project_id: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: IssueStatus::default(),
            due_date: Utc::now().date_naive() + Days::new(Self::DEFAULT_DUE_DAYS),
            project_id,
            member_id: None,
        }
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.member_id.is_some()
    }
}
