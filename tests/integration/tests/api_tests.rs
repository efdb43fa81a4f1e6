//! API Integration Tests
//!
//! Each test starts the full router (middleware included) over the
//! in-memory store on an ephemeral port. No database is required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use integration_tests::*;
use reqwest::StatusCode;
use serde_json::Value;

async fn server() -> TestServer {
    TestServer::start(Arc::new(social_graph()))
        .await
        .expect("Failed to start server")
}

fn id(raw: social_core::Id) -> String {
    raw.to_string()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get("/health").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready_without_database() {
    let server = server().await;
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "disabled");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_feed_requires_auth() {
    let server = server().await;
    let response = server.get("/api/v1/feed/for-you").await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_invalid_token_is_rejected() {
    let server = server().await;
    let response = server
        .get_auth("/api/v1/feed/following", "not-a-token")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = server().await;
    let response = server.get_as("/api/v1/feed/for-you", ALICE).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Feed Tests
// ============================================================================

#[tokio::test]
async fn test_for_you_feed_envelope() {
    let server = server().await;
    let response = server
        .get_as("/api/v1/feed/for-you?page=1&perPage=2", ALICE)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["message"], "success");
    assert_eq!(body["page"], 1);
    assert_eq!(body["perPage"], 2);
    assert_eq!(body["totalPages"], 3);
    assert_eq!(data_ids(&body), vec![id(ALICE_PUBLIC), id(CAROL_PUBLIC)]);

    let carol = &body["data"][1];
    assert_eq!(carol["isLikedByCurrentUser"], true);
    assert_eq!(carol["totalLikes"], 1);
    assert_eq!(carol["owner"]["handle"], "carol");
    assert_eq!(carol["collection"]["previewMedias"][0]["id"], id(PREVIEW_FIRST));
    assert_eq!(body["data"][0]["collection"], Value::Null);
}

#[tokio::test]
async fn test_friend_post_visible_to_friend_only() {
    let server = server().await;

    let response = server.get_as("/api/v1/feed/for-you", ALICE).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(data_ids(&body).contains(&id(BOB_FRIENDS_ONLY)));

    let response = server.get_as("/api/v1/feed/following", ALICE).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(data_ids(&body).contains(&id(BOB_FRIENDS_ONLY)));

    let response = server.get_as("/api/v1/feed/for-you", CAROL).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!data_ids(&body).contains(&id(BOB_FRIENDS_ONLY)));
}

#[tokio::test]
async fn test_following_feed_includes_one_way_public() {
    let server = server().await;
    let response = server.get_as("/api/v1/feed/following", ALICE).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    let ids = data_ids(&body);
    assert!(ids.contains(&id(DAVE_PUBLIC)));
    assert!(!ids.contains(&id(DAVE_FRIENDS_ONLY)));
    assert!(!ids.contains(&id(ALICE_PUBLIC)));
    assert!(!ids.contains(&id(ALICE_FRIENDS_ONLY)));
}

#[tokio::test]
async fn test_malformed_paging_falls_back_to_defaults() {
    let server = server().await;
    let response = server
        .get_as("/api/v1/feed/for-you?page=abc&perPage=-4&order=sideways", ALICE)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["page"], 1);
    assert_eq!(body["perPage"], 1);
    assert_eq!(body["totalPages"], 5);
    assert_eq!(data_ids(&body), vec![id(ALICE_PUBLIC)]);
}

#[tokio::test]
async fn test_per_page_is_capped() {
    let server = server().await;
    let response = server
        .get_as("/api/v1/feed/for-you?perPage=1000&order=asc", ALICE)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["perPage"], 50);
    assert_eq!(data_ids(&body)[0], id(BOB_FRIENDS_ONLY));
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_without_query_is_unprocessable() {
    let server = server().await;

    for path in [
        "/api/v1/search/posts",
        "/api/v1/search/users?query=",
        "/api/v1/search/collections?page=2",
    ] {
        let response = server.get_as(path, ALICE).await.unwrap();
        let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
        assert_eq!(body["error"]["code"], "NO_QUERY_PROVIDED");
        assert_eq!(body["error"]["message"], "No query provided.");
    }
}

#[tokio::test]
async fn test_post_search() {
    let server = server().await;
    let response = server
        .get_as("/api/v1/search/posts?query=sunset%21%21", ALICE)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(data_ids(&body), vec![id(CAROL_PUBLIC), id(DAVE_PUBLIC)]);
    assert_eq!(body["totalPages"], 1);
}

#[tokio::test]
async fn test_post_search_with_only_punctuation_is_empty_success() {
    let server = server().await;
    let response = server
        .get_as("/api/v1/search/posts?query=%26%7C%21", ALICE)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(data_ids(&body).is_empty());
    assert_eq!(body["totalPages"], 0);
}

#[tokio::test]
async fn test_user_search() {
    let server = server().await;
    let response = server
        .get_as("/api/v1/search/users?query=bob", ALICE)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(data_ids(&body), vec![id(BOB)]);
    let bob = &body["data"][0];
    assert_eq!(bob["isFollowedByCurrentUser"], true);
    assert_eq!(bob["bio"], "Bob's bio");
}

#[tokio::test]
async fn test_collection_search() {
    let server = server().await;
    let response = server
        .get_as("/api/v1/search/collections?query=travel", ALICE)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(data_ids(&body), vec![id(CAROL_COLLECTION), id(BOB_COLLECTION)]);
    assert_eq!(body["data"][0]["privacy"], "PUBLIC");
    assert_eq!(body["data"][1]["privacy"], "FRIENDS_ONLY");
}

#[tokio::test]
async fn test_upstream_failure_is_opaque() {
    let store = Arc::new(social_graph());
    store.fail_counts();
    let server = TestServer::start(store).await.unwrap();

    let response = server.get_as("/api/v1/feed/for-you", ALICE).await.unwrap();
    let body: Value = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body["error"]["message"], "Internal server error");
}
