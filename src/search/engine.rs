use super::filter::apply_filters;
use super::types::{ListResponse, SearchQuery};
use crate::recipe::types::Recipe;
use crate::storage::store::RecipeStore;

use anyhow::Result;
use std::sync::Arc;

/// Orders recipes by descending rating, missing ratings counting as 0.
///
/// The sort is stable: equally rated recipes keep the order the store
/// returned them in.
pub fn sort_by_rating(recipes: &mut [Recipe]) {
    recipes.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
}

/// Index range of `page` (1-based) within a collection of `total` items.
///
/// Bounds are clamped into `0..=total`, so out-of-range input produces an
/// empty range rather than a panic.
pub fn page_bounds(page: i64, limit: i64, total: usize) -> (usize, usize) {
    let total_i = i64::try_from(total).unwrap_or(i64::MAX);
    let start = page
        .saturating_sub(1)
        .saturating_mul(limit)
        .clamp(0, total_i);
    let end = page.saturating_mul(limit).clamp(start, total_i);
    (start as usize, end as usize)
}

/// Cuts one page out of an already ordered collection.
pub fn paginate(recipes: Vec<Recipe>, page: i64, limit: i64) -> Vec<Recipe> {
    let (start, end) = page_bounds(page, limit, recipes.len());
    recipes.into_iter().skip(start).take(end - start).collect()
}

/// Listing and search over the full collection.
///
/// Each call reads the whole collection from the store; nothing is cached
/// between requests.
pub struct RecipeCatalog<S> {
    store: Arc<S>,
}

impl<S: RecipeStore> RecipeCatalog<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns one page of the collection ordered by descending rating.
    pub async fn list(&self, page: i64, limit: i64) -> Result<ListResponse> {
        let mut recipes = self.store.fetch_all().await?;
        sort_by_rating(&mut recipes);

        let total = recipes.len();
        let data = paginate(recipes, page, limit);
        tracing::debug!(
            "LIST: page={} limit={} -> {} of {}",
            page,
            limit,
            data.len(),
            total
        );

        Ok(ListResponse {
            page,
            limit,
            total,
            data,
        })
    }

    /// Returns every recipe passing `query`, ordered by descending rating.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>> {
        let recipes = self.store.fetch_all().await?;
        let scanned = recipes.len();

        let mut results = apply_filters(recipes, query);
        sort_by_rating(&mut results);

        tracing::debug!("SEARCH: {:?} -> {} of {}", query, results.len(), scanned);
        Ok(results)
    }
}
