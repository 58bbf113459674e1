use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{Page, PageQueryParams};
use crate::errors::RequestError;
use crate::models::{Comment, User};
use crate::validation::parse_page_request;

use super::comment_helpers::paginate_comments;

pub async fn get_users_in_db(pool: &SqlitePool) -> Result<Vec<User>, RequestError> {
    let result = sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT username, name, avatar_url FROM users
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn get_user_by_username_in_db(
    pool: &SqlitePool,
    username: &str,
) -> Result<User, RequestError> {
    sqlx::query_as::<Sqlite, User>(
        r#"
        SELECT username, name, avatar_url FROM users WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or(RequestError::NotFound)
}

/// Newest-first page of a user's comments, checked against the user lookup
/// the same way article comments are checked against their article.
pub async fn list_comments_by_username_in_db(
    pool: &SqlitePool,
    username: &str,
    PageQueryParams { limit, page }: PageQueryParams,
) -> Result<Page<Comment>, RequestError> {
    let page_request = parse_page_request(limit.as_deref(), page.as_deref())?;

    let user_check = async {
        match get_user_by_username_in_db(pool, username).await {
            Ok(_) => Ok(true),
            Err(RequestError::NotFound) => Ok(false),
            Err(e) => Err(e),
        }
    };
    let listing = async {
        sqlx::query_as::<Sqlite, Comment>(
            r#"
            SELECT comment_id, body, article_id, author, votes, created_at
            FROM   comments
            WHERE  author = $1
            ORDER  BY created_at DESC, comment_id DESC
            "#,
        )
        .bind(username)
        .fetch_all(pool)
        .await
        .map_err(RequestError::from)
    };

    let (user_found, comments) = tokio::try_join!(user_check, listing)?;
    if !user_found {
        return Err(RequestError::NotFound);
    }
    paginate_comments(comments, page_request)
}
