//! File-backed behaviour: data and schema survive closing and reopening.

use bf_core::entities::{Comment, Issue, Member, Project};
use bf_db::BugFlowDb;
use bf_db::seed::{SeedDocument, SeedOutcome, Seeder};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn rows_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bugflow.db");

    let (project_id, issue_id) = {
        let db = BugFlowDb::open(&path).await.unwrap();
        let mut project = Project::new("Durable");
        db.save_project(&mut project).await.unwrap();
        let mut member = Member::new("Maria Ionescu", "maria@bugflow.test");
        db.save_member(&mut member).await.unwrap();
        let mut issue = Issue {
            member_id: member.id,
            ..Issue::new("Persisted", project.id.unwrap())
        };
        db.save_issue(&mut issue).await.unwrap();
        let mut comment = Comment::new("still here", member.id.unwrap(), issue.id.unwrap());
        db.save_comment(&mut comment).await.unwrap();
        (project.id.unwrap(), issue.id.unwrap())
    };

    let db = BugFlowDb::open(&path).await.unwrap();
    assert_eq!(db.get_project(project_id).await.unwrap().unwrap().name, "Durable");
    let loaded = db.get_issue_with_comments(issue_id).await.unwrap().unwrap();
    assert_eq!(loaded.issue.title, "Persisted");
    assert_eq!(loaded.comments[0].text, "still here");
    assert!(db.foreign_keys_enabled().await.unwrap());
}

#[tokio::test]
async fn identities_are_not_reused_after_delete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bugflow.db");
    let db = BugFlowDb::open(&path).await.unwrap();

    let mut first = Project::new("First");
    db.save_project(&mut first).await.unwrap();
    db.delete_project(&first).await.unwrap();

    let mut second = Project::new("Second");
    db.save_project(&mut second).await.unwrap();
    assert!(second.id.unwrap() > first.id.unwrap());
}

#[tokio::test]
async fn reopened_store_is_not_reseeded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bugflow.db");
    let doc = SeedDocument::builtin().unwrap();

    {
        let db = BugFlowDb::open(&path).await.unwrap();
        let outcome = Seeder::new().seed_if_empty(&db, &doc).await.unwrap();
        assert!(matches!(outcome, SeedOutcome::Seeded { projects: 3, .. }));
    }

    let db = BugFlowDb::open(&path).await.unwrap();
    let outcome = Seeder::new().seed_if_empty(&db, &doc).await.unwrap();
    assert_eq!(outcome, SeedOutcome::AlreadyPopulated);
    assert_eq!(db.count::<Project>().await.unwrap(), 3);
    assert_eq!(db.count::<Comment>().await.unwrap(), 8);
}
