pub const DEFAULT_LIMIT: i64 = 10;
pub const DEFAULT_PAGE: i64 = 1;

/// A validated `limit`/`p` pair. Both values are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(limit: i64, page: i64) -> Self {
        Self { limit, page }
    }

    /// Whether this page lies past the end of a result set of `total` rows.
    /// The first page of an empty result set is still a valid page.
    pub fn is_beyond(&self, total: i64) -> bool {
        self.page > total_pages(total, self.limit).max(1)
    }
}

/// Slice `rows` down to the requested page.
///
/// Results shorter than a single page come back untouched, and pages past the
/// end yield an empty vector. Whether that is an error is up to the caller.
pub fn paginate<T>(rows: Vec<T>, PageRequest { limit, page }: PageRequest) -> Vec<T> {
    let limit = limit.max(1) as usize;
    if rows.is_empty() || rows.len() < limit {
        return rows;
    }
    let first = (page.max(1) as usize - 1).saturating_mul(limit);
    rows.into_iter().skip(first).take(limit).collect()
}

pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    let limit = limit.max(1);
    total / limit + i64::from(total % limit != 0)
}
