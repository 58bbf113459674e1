use crate::validation::SortOrder;

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

/// Appends optional `WHERE`, `GROUP BY` and `ORDER BY` clauses to a base
/// `SELECT`. Column names only ever come from `&'static str` fragments; user
/// values go through numbered parameters.
struct QueryBuilder {
    query: String,
    params: Vec<String>,
    filters: Vec<String>,
    group_by: Option<&'static str>,
    order_by: Vec<String>,
}

impl QueryBuilder {
    fn new(initial: &str) -> Self {
        Self {
            query: initial.trim_end().to_owned(),
            params: vec![],
            filters: vec![],
            group_by: None,
            order_by: vec![],
        }
    }

    fn filter(mut self, column: &'static str, param: Option<String>) -> Self {
        if let Some(value) = param {
            self.params.push(value);
            self.filters
                .push(format!("{} = ${}", column, self.params.len()));
        }
        self
    }

    fn group_by(mut self, column: &'static str) -> Self {
        self.group_by = Some(column);
        self
    }

    fn order_by(mut self, column: &'static str, order: SortOrder) -> Self {
        self.order_by
            .push(format!("{} {}", column, order.as_sql()));
        self
    }

    fn build(mut self) -> (String, Vec<String>) {
        if !self.filters.is_empty() {
            self.query.push_str(" WHERE ");
            self.query.push_str(&self.filters.join(" AND "));
        }
        if let Some(column) = self.group_by {
            self.query.push_str(" GROUP BY ");
            self.query.push_str(column);
        }
        if !self.order_by.is_empty() {
            self.query.push_str(" ORDER BY ");
            self.query.push_str(&self.order_by.join(", "));
        }
        (self.query, self.params)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_bare_query_without_clauses() {
        let (query, params) = QueryBuilder::new("SELECT * FROM topics\n    ").build();
        assert_eq!(query, "SELECT * FROM topics");
        assert!(params.is_empty());
    }

    #[test]
    fn skips_absent_filters() {
        let (query, params) = QueryBuilder::new("SELECT * FROM articles")
            .filter("articles.topic", None)
            .order_by("articles.created_at", SortOrder::Desc)
            .build();
        assert_eq!(query, "SELECT * FROM articles ORDER BY articles.created_at DESC");
        assert!(params.is_empty());
    }

    #[test]
    fn numbers_params_and_orders_clauses() {
        let (query, params) = QueryBuilder::new("SELECT * FROM articles")
            .filter("articles.topic", Some("mitch".into()))
            .filter("articles.author", Some("rogersop".into()))
            .group_by("articles.article_id")
            .order_by("comment_count", SortOrder::Asc)
            .order_by("articles.article_id", SortOrder::Asc)
            .build();
        assert_eq!(
            query,
            "SELECT * FROM articles WHERE articles.topic = $1 AND articles.author = $2 \
             GROUP BY articles.article_id ORDER BY comment_count ASC, articles.article_id ASC"
        );
        assert_eq!(params, vec!["mitch".to_string(), "rogersop".to_string()]);
    }
}
