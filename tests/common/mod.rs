#![allow(dead_code)]

use std::net::TcpListener;

use nc_news::{init_db, make_app, serve, Config, RequestErrorJson};
use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{Executor, SqlitePool};

const TEST_DATA: &str = include_str!("../fixtures/test_data.sql");

pub struct TestApp {
    pub address: String,
    pub pool: SqlitePool,
    client: reqwest::Client,
}

/// Start the full application on a random port, backed by a freshly seeded
/// in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = init_db(&Config::in_memory())
        .await
        .expect("in-memory database should initialise");
    pool.execute(TEST_DATA)
        .await
        .expect("test data should load");

    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind a random port");
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(serve(make_app(pool.clone()), listener));

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        pool,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Response {
        self.client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client.delete(self.url(path)).send().await.unwrap()
    }
}

/// Assert the status and decode the JSON body.
pub async fn expect_json<T: DeserializeOwned>(response: Response, status: StatusCode) -> T {
    assert_eq!(response.status(), status, "unexpected status for {}", response.url());
    response.json().await.unwrap()
}

pub async fn expect_error(response: Response, status: StatusCode, msg: &str) {
    let body: RequestErrorJson = expect_json(response, status).await;
    assert_eq!(body.msg, msg);
}
