use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{CommentRequest, Page, PageQueryParams};
use crate::errors::RequestError;
use crate::models::Comment;
use crate::pagination::{paginate, total_pages, PageRequest};
use crate::validation::{parse_page_request, required};

use super::article_exists_in_db;

const COMMENT_COLUMNS: &str = "comment_id, body, article_id, author, votes, created_at";

/// Newest-first page of an article's comments. The article lookup runs
/// alongside the listing so an unknown article can be told apart from one
/// that simply has no comments yet.
pub async fn list_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    PageQueryParams { limit, page }: PageQueryParams,
) -> Result<Page<Comment>, RequestError> {
    let page_request = parse_page_request(limit.as_deref(), page.as_deref())?;
    let query = format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = $1 \
         ORDER BY created_at DESC, comment_id DESC"
    );
    let listing = async {
        sqlx::query_as::<Sqlite, Comment>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
            .map_err(RequestError::from)
    };

    let (article_found, comments) =
        tokio::try_join!(article_exists_in_db(pool, article_id), listing)?;
    if !article_found {
        return Err(RequestError::NotFound);
    }
    paginate_comments(comments, page_request)
}

/// Shared tail of the comment listings: rejects pages past the end and
/// slices out the requested one.
pub(super) fn paginate_comments(
    comments: Vec<Comment>,
    page_request: PageRequest,
) -> Result<Page<Comment>, RequestError> {
    let total = comments.len() as i64;
    if page_request.is_beyond(total) {
        return Err(RequestError::NotFound);
    }
    Ok(Page {
        total_pages: total_pages(total, page_request.limit),
        rows: paginate(comments, page_request),
    })
}

pub async fn get_comment_by_id_in_db(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Comment, RequestError> {
    let query = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE comment_id = $1");
    sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(comment_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RequestError::NotFound)
}

/// Unknown usernames and articles are caught by the foreign keys and come
/// back as not-found.
pub async fn add_comment_to_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    CommentRequest { username, body }: CommentRequest,
) -> Result<Comment, RequestError> {
    let username = required(username)?;
    let body = required(body)?;

    let mut tx = pool.begin().await?;
    let query = format!(
        "INSERT INTO comments (body, article_id, author) VALUES ($1, $2, $3) \
         RETURNING {COMMENT_COLUMNS}"
    );
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(body)
        .bind(article_id)
        .bind(username)
        .fetch_one(&mut tx)
        .await?;
    tx.commit().await?;

    tracing::info!(comment_id = comment.comment_id, article_id, "created comment");
    Ok(comment)
}

pub async fn update_comment_votes_in_db(
    pool: &SqlitePool,
    comment_id: i64,
    inc_votes: i64,
) -> Result<Comment, RequestError> {
    let query = format!(
        "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 \
         RETURNING {COMMENT_COLUMNS}"
    );
    sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(inc_votes)
        .bind(comment_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RequestError::NotFound)
}

pub async fn delete_comment_in_db(pool: &SqlitePool, comment_id: i64) -> Result<(), RequestError> {
    let result = sqlx::query(
        r#"
        DELETE FROM comments WHERE comment_id = $1
        "#,
    )
    .bind(comment_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound);
    }
    tracing::info!(comment_id, "deleted comment");
    Ok(())
}
