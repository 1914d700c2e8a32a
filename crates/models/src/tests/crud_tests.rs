use crate::{comment, errors::ModelError, post};
use anyhow::Result;

fn new_post(title: &str) -> post::NewPost {
    post::NewPost { title: title.to_string(), contents: format!("contents of {title}") }
}

/// Test post CRUD operations
#[tokio::test]
async fn test_post_crud() -> Result<()> {
    let db = super::setup_test_db().await?;

    assert!(post::list(&db).await?.is_empty());

    // Create
    let first = post::create(&db, &new_post("first")).await?;
    let second = post::create(&db, &new_post("second")).await?;
    assert_ne!(first.id, second.id);

    // Read
    let all = post::list(&db).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "first");
    assert_eq!(all[1].title, "second");

    let found = post::find(&db, first.id).await?.expect("post exists");
    assert_eq!(found.contents, "contents of first");
    assert!(post::find(&db, 9_999).await?.is_none());

    // Update only the supplied column
    let changes = post::PostChanges { title: Some("renamed".into()), contents: None };
    assert_eq!(post::update(&db, first.id, &changes).await?, 1);
    let found = post::find(&db, first.id).await?.expect("post exists");
    assert_eq!(found.title, "renamed");
    assert_eq!(found.contents, "contents of first");
    assert!(found.updated_at >= found.created_at);
    assert_eq!(post::update(&db, 9_999, &changes).await?, 0);

    // Delete
    assert_eq!(post::delete(&db, second.id).await?, 1);
    assert_eq!(post::delete(&db, second.id).await?, 0);
    assert_eq!(post::list(&db).await?.len(), 1);
    Ok(())
}

/// Comments are listed per post and carry the post title
#[tokio::test]
async fn test_comment_crud() -> Result<()> {
    let db = super::setup_test_db().await?;
    let a = post::create(&db, &new_post("post a")).await?;
    let b = post::create(&db, &new_post("post b")).await?;

    let c1 = comment::create(&db, &comment::NewComment { text: "one".into(), post_id: a.id }).await?;
    let _c2 = comment::create(&db, &comment::NewComment { text: "two".into(), post_id: a.id }).await?;
    let _c3 = comment::create(&db, &comment::NewComment { text: "other".into(), post_id: b.id }).await?;

    let on_a = comment::list_for_post(&db, a.id).await?;
    assert_eq!(on_a.len(), 2);
    assert!(on_a.iter().all(|c| c.comment.post_id == a.id && c.post == "post a"));
    assert_eq!(on_a[0].comment.text, "one");

    assert!(comment::list_for_post(&db, 9_999).await?.is_empty());

    let found = comment::find_with_post(&db, c1.id).await?.expect("comment exists");
    assert_eq!(found.comment.text, "one");
    assert_eq!(found.post, "post a");
    assert!(comment::find_with_post(&db, 9_999).await?.is_none());
    Ok(())
}

/// Inserting a comment for a missing post is a validation error
#[tokio::test]
async fn test_comment_requires_existing_post() -> Result<()> {
    let db = super::setup_test_db().await?;
    let err = comment::create(&db, &comment::NewComment { text: "orphan".into(), post_id: 42 })
        .await
        .expect_err("must reject unknown post");
    assert!(matches!(err, ModelError::Validation(_)));
    Ok(())
}

/// Title and comment text are unbounded text columns
#[tokio::test]
async fn test_long_title_and_text_are_stored() -> Result<()> {
    let db = super::setup_test_db().await?;
    let title = "t".repeat(4_000);
    let p = post::create(&db, &post::NewPost { title: title.clone(), contents: "c".into() }).await?;
    assert_eq!(post::find(&db, p.id).await?.expect("post exists").title, title);

    let text = "x".repeat(4_000);
    let c = comment::create(&db, &comment::NewComment { text: text.clone(), post_id: p.id }).await?;
    let found = comment::find_with_post(&db, c.id).await?.expect("comment exists");
    assert_eq!(found.comment.text, text);
    Ok(())
}

/// Comment JSON flattens the comment columns next to the post title
#[tokio::test]
async fn test_comment_with_post_serialization() -> Result<()> {
    let db = super::setup_test_db().await?;
    let p = post::create(&db, &new_post("titled")).await?;
    let c = comment::create(&db, &comment::NewComment { text: "hi".into(), post_id: p.id }).await?;

    let found = comment::find_with_post(&db, c.id).await?.expect("comment exists");
    let json = serde_json::to_value(&found)?;
    assert_eq!(json["id"], c.id);
    assert_eq!(json["text"], "hi");
    assert_eq!(json["post_id"], p.id);
    assert_eq!(json["post"], "titled");
    Ok(())
}
