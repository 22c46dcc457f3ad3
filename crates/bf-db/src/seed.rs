//! One-time population of an empty store from a seed document.
//!
//! A seed document names its rows with symbolic keys so that references can
//! be written before identities exist. Keys are resolved to identities as the
//! rows are saved, parents first.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use bf_core::entities::{Comment, Issue, Member, Project};
use bf_core::enums::{IssueStatus, Priority, ProjectStatus, Role, Seniority};
use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::BugFlowDb;
use crate::error::DatabaseError;

const DEMO_DOCUMENT: &str = include_str!("../seed/demo.json");

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedDocument {
    #[serde(default)]
    pub projects: Vec<SeedProject>,
    #[serde(default)]
    pub members: Vec<SeedMember>,
    #[serde(default)]
    pub issues: Vec<SeedIssue>,
    #[serde(default)]
    pub comments: Vec<SeedComment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedProject {
    /// Symbolic name other rows use to reference this project.
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedMember {
    pub key: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub seniority: Seniority,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedIssue {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: IssueStatus,
    pub due_date: NaiveDate,
    /// Key of the owning project.
    pub project: String,
    /// Key of the assigned member, if any.
    #[serde(default)]
    pub assignee: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeedComment {
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Key of the authoring member.
    pub author: String,
    /// Key of the issue commented on.
    pub issue: String,
}

impl SeedDocument {
    /// The demo data embedded in this crate.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Seed` if the embedded JSON does not parse.
    pub fn builtin() -> Result<Self, DatabaseError> {
        Self::from_json(DEMO_DOCUMENT)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Seed` on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, DatabaseError> {
        serde_json::from_str(json).map_err(|e| DatabaseError::Seed(format!("invalid seed document: {e}")))
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Seed` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DatabaseError::Seed(format!("cannot read '{}': {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Check that keys are unique per section and every reference resolves.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Seed` naming the first offending key.
    pub fn check_keys(&self) -> Result<(), DatabaseError> {
        let projects = unique_keys("project", self.projects.iter().map(|p| p.key.as_str()))?;
        let members = unique_keys("member", self.members.iter().map(|m| m.key.as_str()))?;
        let issues = unique_keys("issue", self.issues.iter().map(|i| i.key.as_str()))?;

        for issue in &self.issues {
            require_key(&projects, "issue", &issue.key, "project", &issue.project)?;
            if let Some(assignee) = &issue.assignee {
                require_key(&members, "issue", &issue.key, "member", assignee)?;
            }
        }
        for (index, comment) in self.comments.iter().enumerate() {
            let owner = format!("#{index}");
            require_key(&members, "comment", &owner, "member", &comment.author)?;
            require_key(&issues, "comment", &owner, "issue", &comment.issue)?;
        }
        Ok(())
    }
}

fn unique_keys<'a>(
    section: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, DatabaseError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(DatabaseError::Seed(format!("duplicate {section} key '{key}'")));
        }
    }
    Ok(seen)
}

fn require_key(
    known: &HashSet<&str>,
    owner: &str,
    owner_key: &str,
    target: &str,
    key: &str,
) -> Result<(), DatabaseError> {
    if known.contains(key) {
        Ok(())
    } else {
        Err(DatabaseError::Seed(format!(
            "{owner} '{owner_key}' references unknown {target} '{key}'"
        )))
    }
}

fn resolve(ids: &HashMap<String, i64>, target: &str, key: &str) -> Result<i64, DatabaseError> {
    ids.get(key)
        .copied()
        .ok_or_else(|| DatabaseError::Seed(format!("unknown {target} '{key}'")))
}

// ---------------------------------------------------------------------------
// Seeder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    Seeded {
        projects: usize,
        members: usize,
        issues: usize,
        comments: usize,
    },
    /// The store already held projects; nothing was written.
    AlreadyPopulated,
}

/// Runs a seed document against a store at most once.
///
/// Owned by the application context next to the store handle. Concurrent
/// callers serialize on the gate; the first one to find the store empty
/// writes, the rest see the finished flag or the existing rows.
#[derive(Debug, Default)]
pub struct Seeder {
    gate: Mutex<()>,
    done: AtomicBool,
}

impl Seeder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `doc` into `db` unless the store already has projects.
    ///
    /// Keys are checked before anything is written. If a write fails part-way
    /// the flag stays unset; a later call sees the partial rows and reports
    /// `AlreadyPopulated`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Seed` for unresolvable keys, or any store error.
    pub async fn seed_if_empty(
        &self,
        db: &BugFlowDb,
        doc: &SeedDocument,
    ) -> Result<SeedOutcome, DatabaseError> {
        if self.done.load(Ordering::Acquire) {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let _gate = self.gate.lock().await;
        if self.done.load(Ordering::Acquire) {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        if db.count::<Project>().await? > 0 {
            self.done.store(true, Ordering::Release);
            tracing::debug!("store already populated, skipping seed");
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        doc.check_keys()?;
        let outcome = write_document(db, doc).await?;

        self.done.store(true, Ordering::Release);
        tracing::debug!(?outcome, "seed applied");
        Ok(outcome)
    }

    /// Whether this seeder has finished, either by writing or by finding data.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }
}

async fn write_document(db: &BugFlowDb, doc: &SeedDocument) -> Result<SeedOutcome, DatabaseError> {
    let mut project_ids = HashMap::new();
    for seed in &doc.projects {
        let mut project = Project {
            id: None,
            name: seed.name.clone(),
            description: seed.description.clone(),
            start_date: seed.start_date,
            deadline: seed.deadline,
            status: seed.status,
        };
        project_ids.insert(seed.key.clone(), db.save_project(&mut project).await?);
    }

    let mut member_ids = HashMap::new();
    for seed in &doc.members {
        let mut member = Member {
            id: None,
            full_name: seed.full_name.clone(),
            email: seed.email.clone(),
            role: seed.role,
            seniority: seed.seniority,
        };
        member_ids.insert(seed.key.clone(), db.save_member(&mut member).await?);
    }
    tracing::trace!(projects = project_ids.len(), members = member_ids.len(), "seed parents written");

    let mut issue_ids = HashMap::new();
    for seed in &doc.issues {
        let member_id = seed
            .assignee
            .as_deref()
            .map(|key| resolve(&member_ids, "member", key))
            .transpose()?;
        let mut issue = Issue {
            id: None,
            title: seed.title.clone(),
            description: seed.description.clone(),
            priority: seed.priority,
            status: seed.status,
            due_date: seed.due_date,
            project_id: resolve(&project_ids, "project", &seed.project)?,
            member_id,
        };
        issue_ids.insert(seed.key.clone(), db.save_issue(&mut issue).await?);
    }

    for seed in &doc.comments {
        let mut comment = Comment {
            id: None,
            text: seed.text.clone(),
            created_at: seed.created_at,
            author_id: resolve(&member_ids, "member", &seed.author)?,
            issue_id: resolve(&issue_ids, "issue", &seed.issue)?,
        };
        db.save_comment(&mut comment).await?;
    }

    Ok(SeedOutcome::Seeded {
        projects: project_ids.len(),
        members: member_ids.len(),
        issues: issue_ids.len(),
        comments: doc.comments.len(),
    })
}
