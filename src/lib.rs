pub mod config;
mod data_formats;
mod db_helpers;
mod errors;
mod extractors;
mod handlers;
pub mod models;
pub mod pagination;
mod validation;

use std::{net::TcpListener, str::FromStr, sync::Arc};

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use config::Config;
pub use data_formats::*;
pub use errors::{RequestError, RequestErrorJson};
use handlers::*;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(config: Config) -> Result<()> {
    let db = init_db(&config).await?;
    let listener = TcpListener::bind(config.address())
        .with_context(|| format!("could not bind {}", config.address()))?;
    tracing::info!("Server started on {}", config.address());
    serve(make_app(db), listener).await
}

/// Serve `app` on an already bound listener until the process stops.
pub async fn serve(app: Router, listener: TcpListener) -> Result<()> {
    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(config: &Config) -> Result<SqlitePool> {
    let db_url = &config.database_url;
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .with_context(|| format!("could not create database {}", db_url))?;
    } else {
        tracing::debug!("Database already exists");
    }

    let options = SqliteConnectOptions::from_str(db_url)?.foreign_keys(true);
    // Every connection to `sqlite::memory:` is its own database, so an
    // in-memory pool is pinned to one connection that is never recycled.
    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running Migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations completed");
    Ok(pool)
}

pub fn make_router() -> Router {
    Router::new()
        .route("/api", get(get_endpoints))
        .route("/api/healthcheck", get(alive))
        .route("/api/topics", get(get_topics).post(post_topic))
        .route("/api/articles", get(get_articles).post(post_article))
        .route(
            "/api/articles/:article_id",
            get(get_article).patch(patch_article).delete(delete_article),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_article_comments).post(post_article_comment),
        )
        .route(
            "/api/comments/:comment_id",
            get(get_comment).patch(patch_comment).delete(delete_comment),
        )
        .route("/api/users", get(get_users))
        .route("/api/users/:username", get(get_user))
        .route("/api/users/:username/comments", get(get_user_comments))
        .fallback(not_found)
}

/// The full application: routes plus the shared pool, CORS and request tracing.
pub fn make_app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    make_router()
        .layer(Extension(Arc::new(pool)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
