use serde::{Deserialize, Serialize};

use crate::models::{Article, ArticleSummary, Comment, Topic, User};

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleWrapper {
    pub article: Article,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleArticlesWrapper {
    pub articles: Vec<ArticleSummary>,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentWrapper {
    pub comment: Comment,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleCommentsWrapper {
    pub comments: Vec<Comment>,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TopicWrapper {
    pub topic: Topic,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleTopicsWrapper {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserWrapper {
    pub user: User,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleUsersWrapper {
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EndpointsWrapper {
    pub endpoints: serde_json::Value,
}

/// A single page of rows together with the page count of the full result.
#[derive(Debug)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_pages: i64,
}

impl From<Page<ArticleSummary>> for MultipleArticlesWrapper {
    fn from(Page { rows, total_pages }: Page<ArticleSummary>) -> Self {
        MultipleArticlesWrapper {
            articles: rows,
            total_pages,
        }
    }
}

impl From<Page<Comment>> for MultipleCommentsWrapper {
    fn from(Page { rows, total_pages }: Page<Comment>) -> Self {
        MultipleCommentsWrapper {
            comments: rows,
            total_pages,
        }
    }
}
