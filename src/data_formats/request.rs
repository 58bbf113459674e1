use serde::{Deserialize, Serialize};

// Mandatory fields are `Option` here; the db helpers reject missing and
// blank values alike.

// ----------------- Article Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CreateArticleRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    pub article_img_url: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateVotesRequest {
    pub inc_votes: i64,
}

// ----------------- Comment Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

// ----------------- Topic Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct CreateTopicRequest {
    pub slug: Option<String>,
    pub description: Option<String>,
}
