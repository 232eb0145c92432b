use serde::Deserialize;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

/// Query parameters for paginated listings.
///
/// Values are kept as raw strings so that malformed, zero or negative input falls back
/// to the defaults instead of rejecting the request.
#[derive(Deserialize, Debug, Default)]
pub struct PaginationParam {
    /// One-indexed page number. Values below 1 or not a number become 1.
    pub page: Option<String>,
    /// Items per page. Values below 1 or not a number become 10, values above 100
    /// become 100.
    pub limit: Option<String>,
}

impl PaginationParam {
    pub fn page(&self) -> u64 {
        match parse(&self.page) {
            Some(page) if page >= 1 => page as u64,
            _ => DEFAULT_PAGE,
        }
    }

    pub fn limit(&self) -> u64 {
        match parse(&self.limit) {
            Some(limit) if limit >= 1 => (limit as u64).min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        }
    }
}

fn parse(value: &Option<String>) -> Option<i64> {
    value.as_deref().and_then(|v| v.trim().parse().ok())
}
