//! End-to-end tests against a live server on an ephemeral port.

use link_directory::api::build_router;
use link_directory::api::protocol::ErrorResponse;
use link_directory::store::{ConcurrentStore, Link};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

async fn spawn_server(store: ConcurrentStore) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(Arc::new(store));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_link_lifecycle_over_http() {
    let addr = spawn_server(ConcurrentStore::with_seed([
        ("vids", "https://www.youtube.com"),
        ("docs", "https://gobyexample.com"),
    ]))
    .await;
    let client = reqwest::Client::new();
    let base = format!("http://{}/links", addr);

    // List
    let links: Vec<Link> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].alias, "docs");

    // Create
    let response = client
        .post(&base)
        .json(&json!({"alias": "rust", "url": "https://www.rust-lang.org"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let created: Link = response.json().await.unwrap();
    assert_eq!(created, Link::new("rust", "https://www.rust-lang.org"));

    // Duplicate
    let response = client
        .post(&base)
        .json(&json!({"alias": "rust", "url": "https://example.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CONFLICT);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "Alias is already taken");

    // Update
    let response = client
        .patch(format!("{}/rust", base))
        .json(&json!({"url": "https://doc.rust-lang.org"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    // Get
    let link: Link = client
        .get(format!("{}/rust", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(link.url, "https://doc.rust-lang.org");

    // Prefix listing
    let links: Vec<Link> = client
        .get(format!("{}?prefix=ru", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(links, vec![link]);

    // Delete
    let response = client.delete(format!("{}/rust", base)).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NO_CONTENT);
    let response = client.get(format!("{}/rust", base)).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_without_alias_and_bad_input() {
    let addr = spawn_server(ConcurrentStore::new()).await;
    let client = reqwest::Client::new();
    let base = format!("http://{}/links", addr);

    let created: Link = client
        .post(&base)
        .json(&json!({"url": "https://example.com"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.alias, "a");

    let response = client
        .post(&base)
        .json(&json!({"alias": "b"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "URL is required");

    let response = client
        .post(&base)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let links: Vec<Link> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(links.len(), 1);
}

#[tokio::test]
async fn test_rejected_bodies_answer_400_with_json_error() {
    let addr = spawn_server(ConcurrentStore::with_seed([("docs", "https://gobyexample.com")])).await;
    let client = reqwest::Client::new();
    let base = format!("http://{}/links", addr);

    // Wrongly typed field
    let response = client
        .post(&base)
        .json(&json!({"url": 5}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await.unwrap();
    assert!(!error.error.is_empty());

    // Valid JSON sent with a non-JSON content type
    let response = client
        .post(&base)
        .header("content-type", "text/plain")
        .body(r#"{"alias": "x", "url": "https://example.com"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await.unwrap();
    assert!(!error.error.is_empty());

    // Same rules on update
    let response = client
        .patch(format!("{}/docs", base))
        .json(&json!({"url": ["https://example.com"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let error: ErrorResponse = response.json().await.unwrap();
    assert!(!error.error.is_empty());

    let links: Vec<Link> = client.get(&base).send().await.unwrap().json().await.unwrap();
    assert_eq!(links, vec![Link::new("docs", "https://gobyexample.com")]);
}
