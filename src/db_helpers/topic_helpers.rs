use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::CreateTopicRequest;
use crate::errors::RequestError;
use crate::models::Topic;
use crate::validation::required;

pub async fn get_topics_in_db(pool: &SqlitePool) -> Result<Vec<Topic>, RequestError> {
    let result = sqlx::query_as::<Sqlite, Topic>(
        r#"
        SELECT slug, description FROM topics
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn topic_exists_in_db(pool: &SqlitePool, slug: &str) -> Result<bool, RequestError> {
    let found = sqlx::query(r#"SELECT 1 FROM topics WHERE slug = $1"#)
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// A duplicate slug trips the primary key and is reported as a bad request.
pub async fn insert_topic_in_db(
    pool: &SqlitePool,
    CreateTopicRequest { slug, description }: CreateTopicRequest,
) -> Result<Topic, RequestError> {
    let slug = required(slug)?;

    let mut tx = pool.begin().await?;
    let topic = sqlx::query_as::<Sqlite, Topic>(
        r#"
        INSERT INTO topics (slug, description)
        VALUES ($1, $2)
        RETURNING slug, description
        "#,
    )
    .bind(slug)
    .bind(description)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;

    tracing::info!(slug = %topic.slug, "created topic");
    Ok(topic)
}
