use chrono::{Days, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectStatus;

/// A project that owns a set of issues.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub status: ProjectStatus,
}

impl Project {
    /// Days between the default start date and the default deadline.
    pub const DEFAULT_DEADLINE_DAYS: u64 = 30;

    /// A transient, active project starting today.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let today = Utc::now().date_naive();
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            start_date: today,
            deadline: today + Days::new(Self::DEFAULT_DEADLINE_DAYS),
            status: ProjectStatus::Active,
        }
    }
}
