use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::JsonResponse;

// SQLite extended result codes we translate into client errors.
const SQLITE_MISMATCH: &str = "20";
const SQLITE_CONSTRAINT_CHECK: &str = "275";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Bad request.")]
    BadRequest,
    #[error("Resource not found.")]
    NotFound,
    #[error("Internal server error.")]
    ServerError,
    #[error("database error: {0}")]
    DatabaseError(sqlx::Error),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RequestErrorJson {
    pub msg: String,
}

impl RequestErrorJson {
    pub fn new(msg: &str) -> RequestErrorJson {
        RequestErrorJson {
            msg: msg.to_string(),
        }
    }
}

/// Store errors are split into the two client-facing kinds here so the query
/// builders never have to look at driver codes themselves.
impl From<sqlx::Error> for RequestError {
    fn from(value: sqlx::Error) -> Self {
        let code = match &value {
            sqlx::Error::RowNotFound => return Self::NotFound,
            sqlx::Error::Database(e) => e.code().map(|code| code.into_owned()),
            _ => None,
        };
        match code.as_deref() {
            Some(SQLITE_CONSTRAINT_FOREIGNKEY) => Self::NotFound,
            Some(
                SQLITE_CONSTRAINT_PRIMARYKEY
                | SQLITE_CONSTRAINT_UNIQUE
                | SQLITE_CONSTRAINT_NOTNULL
                | SQLITE_CONSTRAINT_CHECK
                | SQLITE_MISMATCH,
            ) => Self::BadRequest,
            _ => Self::DatabaseError(value),
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::BadRequest => StatusCode::BAD_REQUEST,
            RequestError::NotFound => StatusCode::NOT_FOUND,
            RequestError::ServerError | RequestError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        let json = match self {
            RequestError::DatabaseError(e) => {
                tracing::error!(error = %e, "unhandled database error");
                RequestErrorJson::new("Internal server error.")
            }
            RequestError::ServerError => {
                tracing::error!("internal server error");
                RequestErrorJson::new("Internal server error.")
            }
            other => RequestErrorJson::new(&other.to_string()),
        };
        (self.status_code(), Json(json))
    }
}
