//! Cascade and detach behaviour over the demo data set.

use bf_core::entities::{Comment, Issue, Member, Project};
use bf_db::BugFlowDb;
use bf_db::seed::{SeedDocument, Seeder};
use pretty_assertions::assert_eq;

async fn seeded_db() -> BugFlowDb {
    let db = BugFlowDb::open_in_memory().await.unwrap();
    Seeder::new()
        .seed_if_empty(&db, &SeedDocument::builtin().unwrap())
        .await
        .unwrap();
    db
}

async fn project_named(db: &BugFlowDb, name: &str) -> Project {
    db.list_projects()
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.name == name)
        .unwrap()
}

async fn member_named(db: &BugFlowDb, name: &str) -> Member {
    db.list_members()
        .await
        .unwrap()
        .into_iter()
        .find(|m| m.full_name == name)
        .unwrap()
}

/// Every stored reference points at a stored row.
async fn assert_no_dangling(db: &BugFlowDb) {
    for issue in db.list_issues().await.unwrap() {
        assert!(db.get_project(issue.project_id).await.unwrap().is_some());
        if let Some(member_id) = issue.member_id {
            assert!(db.get_member(member_id).await.unwrap().is_some());
        }
    }
    for comment in db.list_comments().await.unwrap() {
        assert!(db.get_member(comment.author_id).await.unwrap().is_some());
        assert!(db.get_issue(comment.issue_id).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn deleting_demo_project_removes_its_subtree() {
    let db = seeded_db().await;
    let bugflow = project_named(&db, "BugFlow App").await;
    let tree = db
        .get_project_with_children(bugflow.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(tree.issues.len(), 3);
    assert_eq!(tree.comment_count(), 5);

    db.delete_project(&bugflow).await.unwrap();

    assert_eq!(db.count::<Project>().await.unwrap(), 2);
    assert_eq!(db.count::<Issue>().await.unwrap(), 3);
    assert_eq!(db.count::<Comment>().await.unwrap(), 3);
    assert_eq!(db.count::<Member>().await.unwrap(), 4);
    assert_no_dangling(&db).await;
}

#[tokio::test]
async fn deleting_busiest_member_unassigns_and_drops_comments() {
    let db = seeded_db().await;
    let andrei = member_named(&db, "Andrei Popescu").await;
    let assigned = db.get_issues_by_member(andrei.id.unwrap()).await.unwrap();
    assert_eq!(assigned.len(), 3);

    db.delete_member(&andrei).await.unwrap();

    assert_eq!(db.count::<Member>().await.unwrap(), 3);
    assert_eq!(db.count::<Issue>().await.unwrap(), 6);
    assert_eq!(db.count::<Comment>().await.unwrap(), 4);
    for issue in assigned {
        let stored = db.get_issue(issue.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.member_id, None);
    }
    assert_no_dangling(&db).await;
}

#[tokio::test]
async fn deleting_everything_leaves_an_empty_store() {
    let db = seeded_db().await;
    for member in db.list_members().await.unwrap() {
        db.delete_member(&member).await.unwrap();
    }
    for project in db.list_projects().await.unwrap() {
        db.delete_project(&project).await.unwrap();
    }

    assert_eq!(db.count::<Project>().await.unwrap(), 0);
    assert_eq!(db.count::<Member>().await.unwrap(), 0);
    assert_eq!(db.count::<Issue>().await.unwrap(), 0);
    assert_eq!(db.count::<Comment>().await.unwrap(), 0);
}
