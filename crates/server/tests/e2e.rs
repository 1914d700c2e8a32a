use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

/// Real server on an ephemeral port, backed by SeaORM over in-memory SQLite.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    let app = server::startup::build_app(db);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_index_up() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({"api": "up..."}));
    Ok(())
}

#[tokio::test]
async fn e2e_posts_and_comments_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    // Create a post; the response is the full list
    let res = c.post(format!("{}/api/posts", app.base_url))
        .json(&json!({"title": "Hello", "contents": "World"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    let posts = body["api"].as_array().expect("array");
    assert_eq!(posts.len(), 1);
    let id = posts[0]["id"].as_i64().expect("id");

    // Listing agrees
    let listed = c.get(format!("{}/api/posts", app.base_url)).send().await?.json::<Value>().await?;
    assert_eq!(listed["api"][0]["title"], "Hello");

    // Stub PUT leaves the row alone
    let res = c.put(format!("{}/api/posts/{}", app.base_url, id))
        .json(&json!({"title": "Changed"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let one = c.get(format!("{}/api/posts/{}", app.base_url, id)).send().await?.json::<Value>().await?;
    assert_eq!(one["api"]["title"], "Hello");

    // Stub DELETE leaves the row alone
    let res = c.delete(format!("{}/api/posts/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let one = c.get(format!("{}/api/posts/{}", app.base_url, id)).send().await?.json::<Value>().await?;
    assert_eq!(one["api"]["id"], id);

    // Comment on it
    let res = c.post(format!("{}/api/posts/{}/comments", app.base_url, id))
        .json(&json!({"text": "Nice post", "post_id": id}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert!(created["api"]["id"].is_number());
    assert_eq!(created["api"]["post"], "Hello");

    let comments = c.get(format!("{}/api/posts/{}/comments", app.base_url, id)).send().await?.json::<Value>().await?;
    assert_eq!(comments["api"].as_array().map(Vec::len), Some(1));

    // Unknown post id: empty array, still 200
    let res = c.get(format!("{}/api/posts/{}", app.base_url, id + 1000)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"api": []}));
    Ok(())
}

#[tokio::test]
async fn e2e_comment_with_invalid_post_id_fails() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/api/posts/5/comments", app.base_url))
        .json(&json!({"text": "nobody home", "post_id": 5}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
