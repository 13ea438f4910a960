// tests/e2e_error_statuses.rs
use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

#[tokio::test]
async fn missing_identity_header_returns_401() {
    let (_, app) = support::make_seeded_router();

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/videos/1/like")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = support::read_json(resp).await;
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn garbage_identity_header_returns_401() {
    let (_, app) = support::make_seeded_router();

    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/videos/1/like")
        .header(support::USER_ID_HEADER, "not-a-number")
        .body(axum::body::Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_video_returns_404() {
    let (_, app) = support::make_seeded_router();

    let resp = app
        .clone()
        .oneshot(support::get("/api/v1/videos/99"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(support::post_as("/api/v1/videos/99/like", 3))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn whitespace_comment_returns_400_and_is_not_stored() {
    let (store, app) = support::make_seeded_router();

    let resp = app
        .clone()
        .oneshot(support::json_request(
            "POST",
            "/api/v1/videos/1/comments",
            3,
            &json!({"text": "   "}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let video = store
        .video(vidshare_core::domain::video::VideoId::new(1).unwrap())
        .unwrap();
    assert!(video.comments.is_empty());
}

#[tokio::test]
async fn non_author_mutation_returns_403_and_leaves_the_comment_alone() {
    let (store, app) = support::make_seeded_router();

    let resp = app
        .clone()
        .oneshot(support::json_request(
            "POST",
            "/api/v1/videos/1/comments",
            3,
            &json!({"text": "mine"}),
        ))
        .await
        .unwrap();
    let created = support::read_json(resp).await;
    let comment_id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(support::json_request(
            "PUT",
            &format!("/api/v1/videos/1/comments/{comment_id}"),
            4,
            &json!({"text": "hijacked"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app
        .clone()
        .oneshot(support::json_request(
            "DELETE",
            &format!("/api/v1/videos/1/comments/{comment_id}"),
            4,
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let video = store
        .video(vidshare_core::domain::video::VideoId::new(1).unwrap())
        .unwrap();
    let stored = video
        .comments
        .get(vidshare_core::domain::video::CommentId::new(comment_id).unwrap())
        .unwrap();
    assert_eq!(stored.text.as_str(), "mine");
}

#[tokio::test]
async fn unknown_comment_returns_404() {
    let (_, app) = support::make_seeded_router();

    let resp = app
        .clone()
        .oneshot(support::json_request(
            "PUT",
            "/api/v1/videos/1/comments/42",
            3,
            &json!({"text": "ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
