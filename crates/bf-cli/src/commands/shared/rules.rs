//! Field-level checks applied before a create or update reaches the store.

use anyhow::bail;
use bf_core::entities::{Comment, Issue, Member, Project};
use bf_core::rules::{
    has_required_text, is_issue_date_valid, is_project_timeline_valid, is_valid_email,
};
use chrono::NaiveDate;

pub fn check_project(project: &Project) -> anyhow::Result<()> {
    if !has_required_text(Some(project.name.as_str())) {
        bail!("project name is required");
    }
    if !is_project_timeline_valid(project.start_date, project.deadline) {
        bail!(
            "project deadline {} is before its start date {}",
            project.deadline,
            project.start_date
        );
    }
    Ok(())
}

pub fn check_member(member: &Member) -> anyhow::Result<()> {
    if !has_required_text(Some(member.full_name.as_str())) {
        bail!("member name is required");
    }
    if !is_valid_email(Some(member.email.as_str())) {
        bail!("'{}' is not a valid email address", member.email);
    }
    Ok(())
}

/// `today` is `Some` when the due date must not be in the past.
pub fn check_issue(issue: &Issue, today: Option<NaiveDate>) -> anyhow::Result<()> {
    if !has_required_text(Some(issue.title.as_str())) {
        bail!("issue title is required");
    }
    if today.is_some_and(|today| !is_issue_date_valid(issue.due_date, today)) {
        bail!("issue due date {} is in the past", issue.due_date);
    }
    Ok(())
}

pub fn check_comment(comment: &Comment) -> anyhow::Result<()> {
    if !has_required_text(Some(comment.text.as_str())) {
        bail!("comment text is required");
    }
    Ok(())
}
