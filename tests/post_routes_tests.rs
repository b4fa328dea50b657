// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Post route tests.
//!
//! These tests drive the full router with an in-memory database:
//! submission with and without a session credential, thread responses,
//! listing, and method dispatch.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

const BODY_LIMIT: usize = 64 * 1024;

fn json_request(uri: &str, body: &str, credential: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = credential {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_submit_single_post() {
    let (app, state) = common::create_test_app().await;
    let credential = common::test_credential("42", &state.config.session_secret);

    let response = app
        .oneshot(json_request(
            "/posts",
            r#"[{"text": "hello world"}]"#,
            Some(&credential),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["text"], "hello world");
    assert_eq!(body["is_thread"], false);
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["user_id"], 42);
    // Standalone posts carry no thread fields.
    assert!(body.get("thread_count").is_none());
    assert!(body.get("thread_order").is_none());
}

#[tokio::test]
async fn test_submit_thread_returns_head() {
    let (app, state) = common::create_test_app().await;
    let credential = common::test_credential("42", &state.config.session_secret);

    let response = app
        .oneshot(json_request(
            "/posts",
            r#"[{"text": "a"}, {"text": "b"}, {"text": "c"}]"#,
            Some(&credential),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["text"], "a");
    assert_eq!(body["is_thread"], true);
    assert_eq!(body["thread_order"], 1);
    assert_eq!(body["thread_count"], 3);
    assert!(body.get("thread_parent").is_none());

    // Both members exist and point at the head.
    let head_id = body["id"].as_i64().unwrap();
    let members: Vec<(i64, i64)> =
        sqlx::query_as("SELECT thread_order, thread_parent FROM posts WHERE thread_parent IS NOT NULL ORDER BY thread_order")
            .fetch_all(state.db.pool())
            .await
            .unwrap();
    assert_eq!(members, vec![(2, head_id), (3, head_id)]);
}

#[tokio::test]
async fn test_submit_without_credential_is_unowned() {
    let (app, state) = common::create_test_app().await;

    let response = app
        .oneshot(json_request("/posts", r#"[{"text": "anon"}]"#, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let owner: (Option<i64>,) = sqlx::query_as("SELECT user_id FROM posts LIMIT 1")
        .fetch_one(state.db.pool())
        .await
        .unwrap();
    assert_eq!(owner.0, None);
}

#[tokio::test]
async fn test_submit_with_invalid_credential_is_unowned() {
    let (app, state) = common::create_test_app().await;

    let response = app
        .oneshot(json_request(
            "/posts",
            r#"[{"text": "anon"}]"#,
            Some("not.a.credential"),
        ))
        .await
        .unwrap();

    // Invalid credentials do not reject the write; they just drop identity.
    assert_eq!(response.status(), StatusCode::OK);

    let owner: (Option<i64>,) = sqlx::query_as("SELECT user_id FROM posts LIMIT 1")
        .fetch_one(state.db.pool())
        .await
        .unwrap();
    assert_eq!(owner.0, None);
}

#[tokio::test]
async fn test_submit_empty_list_is_rejected() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(json_request("/posts", "[]", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_list_requires_identity() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_returns_callers_posts() {
    let (app, state) = common::create_test_app().await;
    let credential = common::test_credential("42", &state.config.session_secret);

    let submit = app
        .clone()
        .oneshot(json_request(
            "/posts",
            r#"[{"text": "a"}, {"text": "b"}]"#,
            Some(&credential),
        ))
        .await
        .unwrap();
    assert_eq!(submit.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/posts")
                .header(header::AUTHORIZATION, format!("Bearer {}", credential))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["thread_order"], 1);
    assert_eq!(posts[1]["thread_order"], 2);
}

#[tokio::test]
async fn test_credential_without_bearer_prefix_is_accepted() {
    let (app, state) = common::create_test_app().await;
    let credential = common::test_credential("42", &state.config.session_secret);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/posts")
                .header(header::AUTHORIZATION, credential)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_method_yields_404() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_auth_rejects_non_post_methods() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/auth")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_yields_404() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}
