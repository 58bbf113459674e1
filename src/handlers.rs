use std::sync::Arc;

use axum::{http::StatusCode, Extension, Json};
use sqlx::SqlitePool;

use crate::{
    data_formats::*,
    db_helpers::*,
    errors::{RequestError, RequestErrorJson},
    extractors::{ValidJson, ValidPath, ValidQuery},
    JsonResponse,
};

type Pool = Extension<Arc<SqlitePool>>;

type JsonResult<T> = Result<Json<T>, RequestError>;
type CreatedResult<T> = Result<JsonResponse<T>, RequestError>;

const ENDPOINTS: &str = include_str!("../endpoints.json");

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found() -> JsonResponse<RequestErrorJson> {
    (
        StatusCode::NOT_FOUND,
        Json(RequestErrorJson::new("Path not found.")),
    )
}

pub async fn get_endpoints() -> JsonResult<EndpointsWrapper> {
    let endpoints = serde_json::from_str(ENDPOINTS).map_err(|e| {
        tracing::error!(error = %e, "endpoints.json is not valid JSON");
        RequestError::ServerError
    })?;
    Ok(Json(EndpointsWrapper { endpoints }))
}

// ----------------- Topic Handlers -----------------
pub async fn get_topics(Extension(pool): Pool) -> JsonResult<MultipleTopicsWrapper> {
    let topics = get_topics_in_db(&pool).await?;
    Ok(Json(MultipleTopicsWrapper { topics }))
}

pub async fn post_topic(
    Extension(pool): Pool,
    ValidJson(request): ValidJson<CreateTopicRequest>,
) -> CreatedResult<TopicWrapper> {
    let topic = insert_topic_in_db(&pool, request).await?;
    Ok((StatusCode::CREATED, Json(TopicWrapper { topic })))
}

// ----------------- Article Handlers -----------------
pub async fn get_articles(
    Extension(pool): Pool,
    ValidQuery(params): ValidQuery<ArticleQueryParams>,
) -> JsonResult<MultipleArticlesWrapper> {
    let page = list_articles_in_db(&pool, params).await?;
    Ok(Json(page.into()))
}

pub async fn post_article(
    Extension(pool): Pool,
    ValidJson(request): ValidJson<CreateArticleRequest>,
) -> CreatedResult<ArticleWrapper> {
    let article = create_article_in_db(&pool, request).await?;
    Ok((StatusCode::CREATED, Json(ArticleWrapper { article })))
}

pub async fn get_article(
    Extension(pool): Pool,
    ValidPath(article_id): ValidPath<i64>,
) -> JsonResult<ArticleWrapper> {
    let article = get_article_by_id_in_db(&pool, article_id).await?;
    Ok(Json(ArticleWrapper { article }))
}

pub async fn patch_article(
    Extension(pool): Pool,
    ValidPath(article_id): ValidPath<i64>,
    ValidJson(UpdateVotesRequest { inc_votes }): ValidJson<UpdateVotesRequest>,
) -> JsonResult<ArticleWrapper> {
    let article = update_article_votes_in_db(&pool, article_id, inc_votes).await?;
    Ok(Json(ArticleWrapper { article }))
}

pub async fn delete_article(
    Extension(pool): Pool,
    ValidPath(article_id): ValidPath<i64>,
) -> Result<StatusCode, RequestError> {
    delete_article_in_db(&pool, article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- Comment Handlers -----------------
pub async fn get_article_comments(
    Extension(pool): Pool,
    ValidPath(article_id): ValidPath<i64>,
    ValidQuery(params): ValidQuery<PageQueryParams>,
) -> JsonResult<MultipleCommentsWrapper> {
    let page = list_comments_for_article_in_db(&pool, article_id, params).await?;
    Ok(Json(page.into()))
}

pub async fn post_article_comment(
    Extension(pool): Pool,
    ValidPath(article_id): ValidPath<i64>,
    ValidJson(request): ValidJson<CommentRequest>,
) -> CreatedResult<CommentWrapper> {
    let comment = add_comment_to_article_in_db(&pool, article_id, request).await?;
    Ok((StatusCode::CREATED, Json(CommentWrapper { comment })))
}

pub async fn get_comment(
    Extension(pool): Pool,
    ValidPath(comment_id): ValidPath<i64>,
) -> JsonResult<CommentWrapper> {
    let comment = get_comment_by_id_in_db(&pool, comment_id).await?;
    Ok(Json(CommentWrapper { comment }))
}

pub async fn patch_comment(
    Extension(pool): Pool,
    ValidPath(comment_id): ValidPath<i64>,
    ValidJson(UpdateVotesRequest { inc_votes }): ValidJson<UpdateVotesRequest>,
) -> JsonResult<CommentWrapper> {
    let comment = update_comment_votes_in_db(&pool, comment_id, inc_votes).await?;
    Ok(Json(CommentWrapper { comment }))
}

pub async fn delete_comment(
    Extension(pool): Pool,
    ValidPath(comment_id): ValidPath<i64>,
) -> Result<StatusCode, RequestError> {
    delete_comment_in_db(&pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------
pub async fn get_users(Extension(pool): Pool) -> JsonResult<MultipleUsersWrapper> {
    let users = get_users_in_db(&pool).await?;
    Ok(Json(MultipleUsersWrapper { users }))
}

pub async fn get_user(
    Extension(pool): Pool,
    ValidPath(username): ValidPath<String>,
) -> JsonResult<UserWrapper> {
    let user = get_user_by_username_in_db(&pool, &username).await?;
    Ok(Json(UserWrapper { user }))
}

pub async fn get_user_comments(
    Extension(pool): Pool,
    ValidPath(username): ValidPath<String>,
    ValidQuery(params): ValidQuery<PageQueryParams>,
) -> JsonResult<MultipleCommentsWrapper> {
    let page = list_comments_by_username_in_db(&pool, &username, params).await?;
    Ok(Json(page.into()))
}
