use anyhow::Context;
use bf_core::entities::{Comment, Issue, Member, Project};
use bf_db::BugFlowDb;

pub async fn require_project(db: &BugFlowDb, id: i64) -> anyhow::Result<Project> {
    db.get_project(id)
        .await?
        .with_context(|| format!("project {id} not found"))
}

pub async fn require_member(db: &BugFlowDb, id: i64) -> anyhow::Result<Member> {
    db.get_member(id)
        .await?
        .with_context(|| format!("member {id} not found"))
}

pub async fn require_issue(db: &BugFlowDb, id: i64) -> anyhow::Result<Issue> {
    db.get_issue(id)
        .await?
        .with_context(|| format!("issue {id} not found"))
}

pub async fn require_comment(db: &BugFlowDb, id: i64) -> anyhow::Result<Comment> {
    db.get_comment(id)
        .await?
        .with_context(|| format!("comment {id} not found"))
}
