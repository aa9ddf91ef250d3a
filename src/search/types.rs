use crate::recipe::types::Recipe;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

/// Query string of the listing endpoint. `page` is 1-based.
///
/// Neither value is range checked; a page past the end, or a non-positive
/// page or limit, simply yields an empty slice.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query string of the search endpoint.
///
/// `rating`, `total_time` and `calories` hold comparison expressions such
/// as `>=4.5`. Empty values count as not given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<String>,
    pub total_time: Option<String>,
    pub calories: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl SearchQuery {
    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn cuisine(&self) -> Option<&str> {
        non_empty(&self.cuisine)
    }

    pub fn rating(&self) -> Option<&str> {
        non_empty(&self.rating)
    }

    pub fn total_time(&self) -> Option<&str> {
        non_empty(&self.total_time)
    }

    pub fn calories(&self) -> Option<&str> {
        non_empty(&self.calories)
    }
}

/// One page of the rating-ordered collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub page: i64,
    pub limit: i64,
    /// Size of the whole collection, not of `data`.
    pub total: usize,
    pub data: Vec<Recipe>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<Recipe>,
}
