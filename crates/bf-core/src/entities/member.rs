use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Role, Seniority};

/// A team member who can be assigned issues and author comments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Member {
    pub id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub seniority: Seniority,
}

impl Member {
    #[must_use]
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            full_name: full_name.into(),
            email: email.into(),
            role: Role::default(),
            seniority: Seniority::default(),
        }
    }
}
