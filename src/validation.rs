use std::str::FromStr;

use crate::{
    errors::RequestError,
    pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE},
};

/// Columns an article listing may be ordered by. Each maps to a fixed SQL
/// fragment, so nothing from the query string is spliced into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortColumn {
    #[default]
    CreatedAt,
    Author,
    Title,
    ArticleId,
    Topic,
    Votes,
    ArticleImgUrl,
    CommentCount,
}

impl ArticleSortColumn {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::CreatedAt => "articles.created_at",
            Self::Author => "articles.author",
            Self::Title => "articles.title",
            Self::ArticleId => "articles.article_id",
            Self::Topic => "articles.topic",
            Self::Votes => "articles.votes",
            Self::ArticleImgUrl => "articles.article_img_url",
            Self::CommentCount => "comment_count",
        }
    }
}

impl FromStr for ArticleSortColumn {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "author" => Ok(Self::Author),
            "title" => Ok(Self::Title),
            "article_id" => Ok(Self::ArticleId),
            "topic" => Ok(Self::Topic),
            "votes" => Ok(Self::Votes),
            "article_img_url" => Ok(Self::ArticleImgUrl),
            "comment_count" => Ok(Self::CommentCount),
            _ => Err(RequestError::BadRequest),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(RequestError::BadRequest),
        }
    }
}

/// Parse an optional enum-like query value, falling back to its default.
pub fn parse_or_default<T>(value: Option<&str>) -> Result<T, RequestError>
where
    T: FromStr<Err = RequestError> + Default,
{
    value.map(str::parse).transpose().map(Option::unwrap_or_default)
}

pub fn parse_positive_int(value: &str) -> Result<i64, RequestError> {
    match value.trim().parse::<i64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(RequestError::BadRequest),
    }
}

pub fn parse_page_request(
    limit: Option<&str>,
    page: Option<&str>,
) -> Result<PageRequest, RequestError> {
    let limit = limit.map(parse_positive_int).transpose()?;
    let page = page.map(parse_positive_int).transpose()?;
    Ok(PageRequest::new(
        limit.unwrap_or(DEFAULT_LIMIT),
        page.unwrap_or(DEFAULT_PAGE),
    ))
}

/// Mandatory body field: absent or blank values are rejected.
pub fn required(value: Option<String>) -> Result<String, RequestError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RequestError::BadRequest),
    }
}
