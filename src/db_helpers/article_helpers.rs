use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{ArticleQueryParams, CreateArticleRequest, Page};
use crate::errors::RequestError;
use crate::models::{Article, ArticleSummary};
use crate::pagination::{paginate, total_pages};
use crate::validation::{
    parse_or_default, parse_page_request, required, ArticleSortColumn, SortOrder,
};

use super::{topic_exists_in_db, QueryBuilder};

pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

const ARTICLE_SUMMARY_QUERY: &str = r#"
            SELECT articles.article_id               AS "article_id",
                   articles.title                    AS "title",
                   articles.topic                    AS "topic",
                   articles.author                   AS "author",
                   articles.created_at               AS "created_at",
                   articles.votes                    AS "votes",
                   articles.article_img_url          AS "article_img_url",
                   COUNT(comments.comment_id)        AS "comment_count",
                   COUNT(*) OVER ()                  AS "total_count"
            FROM   articles
                   LEFT JOIN comments
                          ON comments.article_id = articles.article_id
"#;

const SINGLE_ARTICLE_QUERY: &str = r#"
            SELECT articles.article_id               AS "article_id",
                   articles.title                    AS "title",
                   articles.topic                    AS "topic",
                   articles.author                   AS "author",
                   articles.body                     AS "body",
                   articles.created_at               AS "created_at",
                   articles.votes                    AS "votes",
                   articles.article_img_url          AS "article_img_url",
                   COUNT(comments.comment_id)        AS "comment_count"
            FROM   articles
                   LEFT JOIN comments
                          ON comments.article_id = articles.article_id
            WHERE  articles.article_id = $1
            GROUP  BY articles.article_id
"#;

/// Filtered, sorted and paginated article listing.
///
/// The topic lookup and the listing run concurrently. An unknown topic is a
/// not-found even though the listing itself would just come back empty.
pub async fn list_articles_in_db(
    pool: &SqlitePool,
    ArticleQueryParams {
        topic,
        sort_by,
        order,
        limit,
        page,
    }: ArticleQueryParams,
) -> Result<Page<ArticleSummary>, RequestError> {
    let sort_by: ArticleSortColumn = parse_or_default(sort_by.as_deref())?;
    let order: SortOrder = parse_or_default(order.as_deref())?;
    let page_request = parse_page_request(limit.as_deref(), page.as_deref())?;

    let (query, params) = QueryBuilder::new(ARTICLE_SUMMARY_QUERY)
        .filter("articles.topic", topic.clone())
        .group_by("articles.article_id")
        .order_by(sort_by.as_sql(), order)
        .order_by("articles.article_id", order)
        .build();

    let topic_check = async {
        match &topic {
            Some(slug) => topic_exists_in_db(pool, slug).await,
            None => Ok(true),
        }
    };
    let listing = async {
        let mut articles = sqlx::query_as::<Sqlite, ArticleSummary>(&query);
        for param in &params {
            articles = articles.bind(param.as_str());
        }
        articles.fetch_all(pool).await.map_err(RequestError::from)
    };

    let (topic_found, articles) = tokio::try_join!(topic_check, listing)?;
    if !topic_found {
        return Err(RequestError::NotFound);
    }

    let total = articles.first().map_or(0, |article| article.total_count);
    if page_request.is_beyond(total) {
        return Err(RequestError::NotFound);
    }
    tracing::debug!(?topic, total, ?page_request, "listed articles");

    Ok(Page {
        total_pages: total_pages(total, page_request.limit),
        rows: paginate(articles, page_request),
    })
}

pub async fn get_article_by_id_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Article, RequestError> {
    sqlx::query_as::<Sqlite, Article>(SINGLE_ARTICLE_QUERY)
        .bind(article_id)
        .fetch_optional(pool)
        .await?
        .ok_or(RequestError::NotFound)
}

pub async fn article_exists_in_db(pool: &SqlitePool, article_id: i64) -> Result<bool, RequestError> {
    let found = sqlx::query(r#"SELECT 1 FROM articles WHERE article_id = $1"#)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create_article_in_db(
    pool: &SqlitePool,
    CreateArticleRequest {
        author,
        title,
        body,
        topic,
        article_img_url,
    }: CreateArticleRequest,
) -> Result<Article, RequestError> {
    let author = required(author)?;
    let title = required(title)?;
    let body = required(body)?;
    let topic = required(topic)?;
    let article_img_url = article_img_url.unwrap_or_else(|| DEFAULT_ARTICLE_IMG_URL.to_owned());

    let mut tx = pool.begin().await?;
    let (article_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO articles (author, title, body, topic, article_img_url)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING article_id
        "#,
    )
    .bind(author)
    .bind(title)
    .bind(body)
    .bind(topic)
    .bind(article_img_url)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;

    tracing::info!(article_id, "created article");
    get_article_by_id_in_db(pool, article_id).await
}

/// Applies a signed vote delta in a single relative `UPDATE`, then reads the
/// article back with its comment count.
pub async fn update_article_votes_in_db(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Article, RequestError> {
    let result = sqlx::query(
        r#"
        UPDATE articles SET votes = votes + $1 WHERE article_id = $2
        "#,
    )
    .bind(inc_votes)
    .bind(article_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound);
    }

    get_article_by_id_in_db(pool, article_id).await
}

/// Comments go with the article through the `ON DELETE CASCADE` foreign key.
pub async fn delete_article_in_db(pool: &SqlitePool, article_id: i64) -> Result<(), RequestError> {
    let result = sqlx::query(
        r#"
        DELETE FROM articles WHERE article_id = $1
        "#,
    )
    .bind(article_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound);
    }
    tracing::info!(article_id, "deleted article");
    Ok(())
}
