mod common;

use common::{expect_error, expect_json, spawn_app};
use nc_news::{CommentWrapper, MultipleCommentsWrapper};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn lists_article_comments_newest_first() {
    let app = spawn_app().await;
    let MultipleCommentsWrapper { comments, total_pages } =
        expect_json(app.get("/api/articles/1/comments").await, StatusCode::OK).await;

    assert_eq!(comments.len(), 10);
    assert_eq!(total_pages, 2);
    assert!(comments.iter().all(|c| c.article_id == 1));
    assert!(comments
        .windows(2)
        .all(|p| p[0].created_at >= p[1].created_at));
}

#[tokio::test]
async fn article_without_comments_is_empty() {
    let app = spawn_app().await;
    let MultipleCommentsWrapper { comments, .. } =
        expect_json(app.get("/api/articles/13/comments").await, StatusCode::OK).await;
    assert!(comments.is_empty());
}

#[tokio::test]
async fn paginates_article_comments() {
    let app = spawn_app().await;
    let MultipleCommentsWrapper { comments, total_pages } = expect_json(
        app.get("/api/articles/1/comments?limit=5&p=2").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(comments.len(), 5);
    assert_eq!(comments[0].comment_id, 8);
    assert_eq!(total_pages, 3);

    let MultipleCommentsWrapper { comments, total_pages } = expect_json(
        app.get("/api/articles/1/comments?limit=99999").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(comments.len(), 11);
    assert_eq!(total_pages, 1);
}

#[tokio::test]
async fn rejects_bad_comment_listings() {
    let app = spawn_app().await;
    for path in [
        "/api/articles/1/comments?limit=notANumber",
        "/api/articles/1/comments?p=notANumber",
        "/api/articles/notAnId/comments",
    ] {
        expect_error(app.get(path).await, StatusCode::BAD_REQUEST, "Bad request.").await;
    }
    for path in [
        "/api/articles/1/comments?limit=5&p=99999",
        "/api/articles/99999/comments",
    ] {
        expect_error(app.get(path).await, StatusCode::NOT_FOUND, "Resource not found.").await;
    }
}

#[tokio::test]
async fn posts_comment() {
    let app = spawn_app().await;
    let response = app
        .post(
            "/api/articles/2/comments",
            &json!({ "username": "icellusedkars", "body": "cant stop, wont stop" }),
        )
        .await;
    let CommentWrapper { comment } = expect_json(response, StatusCode::CREATED).await;

    assert_eq!(comment.comment_id, 19);
    assert_eq!(comment.body, "cant stop, wont stop");
    assert_eq!(comment.article_id, 2);
    assert_eq!(comment.author, "icellusedkars");
    assert_eq!(comment.votes, 0);
}

#[tokio::test]
async fn post_comment_rejects_bad_input() {
    let app = spawn_app().await;
    expect_error(
        app.post("/api/articles/2/comments", &json!({ "username": "whatever" }))
            .await,
        StatusCode::BAD_REQUEST,
        "Bad request.",
    )
    .await;
    expect_error(
        app.post(
            "/api/articles/notAnId/comments",
            &json!({ "username": "icellusedkars", "body": "hello" }),
        )
        .await,
        StatusCode::BAD_REQUEST,
        "Bad request.",
    )
    .await;
    expect_error(
        app.post(
            "/api/articles/99999/comments",
            &json!({ "username": "icellusedkars", "body": "hello" }),
        )
        .await,
        StatusCode::NOT_FOUND,
        "Resource not found.",
    )
    .await;
    expect_error(
        app.post(
            "/api/articles/2/comments",
            &json!({ "username": "notAUser", "body": "hello" }),
        )
        .await,
        StatusCode::NOT_FOUND,
        "Resource not found.",
    )
    .await;
}

#[tokio::test]
async fn gets_comment_by_id() {
    let app = spawn_app().await;
    let CommentWrapper { comment } =
        expect_json(app.get("/api/comments/1").await, StatusCode::OK).await;
    assert_eq!(comment.comment_id, 1);
    assert_eq!(comment.votes, 16);

    expect_error(
        app.get("/api/comments/99999").await,
        StatusCode::NOT_FOUND,
        "Resource not found.",
    )
    .await;
}

#[tokio::test]
async fn vote_patches_compose() {
    let app = spawn_app().await;
    let CommentWrapper { comment } = expect_json(
        app.patch("/api/comments/1", &json!({ "inc_votes": 2 })).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(comment.votes, 18);

    let CommentWrapper { comment } = expect_json(
        app.patch(
            "/api/comments/1",
            &json!({ "inc_votes": -5, "someOtherKey": "ignored" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(comment.votes, 13);
}

#[tokio::test]
async fn out_of_range_comment_vote_is_rejected() {
    let app = spawn_app().await;
    expect_error(
        app.patch("/api/comments/1", &json!({ "inc_votes": i64::MAX })).await,
        StatusCode::BAD_REQUEST,
        "Bad request.",
    )
    .await;

    let CommentWrapper { comment } =
        expect_json(app.get("/api/comments/1").await, StatusCode::OK).await;
    assert_eq!(comment.votes, 16);
    let MultipleCommentsWrapper { comments, .. } =
        expect_json(app.get("/api/articles/9/comments").await, StatusCode::OK).await;
    assert!(comments.iter().any(|c| c.comment_id == 1));
}

#[tokio::test]
async fn comment_patch_rejects_bad_input() {
    let app = spawn_app().await;
    for (path, body) in [
        ("/api/comments/1", json!({})),
        ("/api/comments/1", json!({ "inc_votes": "hello" })),
        ("/api/comments/notAnId", json!({ "inc_votes": 1 })),
    ] {
        expect_error(
            app.patch(path, &body).await,
            StatusCode::BAD_REQUEST,
            "Bad request.",
        )
        .await;
    }
    expect_error(
        app.patch("/api/comments/99999", &json!({ "inc_votes": 1 })).await,
        StatusCode::NOT_FOUND,
        "Resource not found.",
    )
    .await;
}

#[tokio::test]
async fn deletes_comment() {
    let app = spawn_app().await;
    let response = app.delete("/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    expect_error(
        app.get("/api/comments/1").await,
        StatusCode::NOT_FOUND,
        "Resource not found.",
    )
    .await;
    expect_error(
        app.delete("/api/comments/1").await,
        StatusCode::NOT_FOUND,
        "Resource not found.",
    )
    .await;
    expect_error(
        app.delete("/api/comments/notAnId").await,
        StatusCode::BAD_REQUEST,
        "Bad request.",
    )
    .await;
}
