//! Store Contract
//!
//! The minimum the catalog needs from a document store: insert a record and
//! get an identifier back, and read the whole collection. No query pushdown is
//! assumed; filtering and ordering happen in the search engine.

use crate::recipe::types::{Recipe, RecipeDetails, RecipeId};

use anyhow::Result;
use std::future::Future;

pub trait RecipeStore: Send + Sync + 'static {
    /// Persists a new record and returns the identifier the store assigned to it.
    ///
    /// Every call creates a new record; there is no duplicate check.
    fn insert(&self, details: RecipeDetails) -> impl Future<Output = Result<RecipeId>> + Send;

    /// Materializes the full collection.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Recipe>>> + Send;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
