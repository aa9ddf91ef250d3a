use super::store::RecipeStore;
use crate::recipe::types::{Recipe, RecipeDetails, RecipeId};

use anyhow::Result;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// A record together with the order in which it was inserted.
#[derive(Debug, Clone)]
struct StoredRecipe {
    seq: u64,
    recipe: Recipe,
}

/// In-process document store keyed by `RecipeId`.
///
/// `fetch_all` hands records back in insertion order so that anything sorting
/// on top of it with a stable sort is deterministic for a given load.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: DashMap<RecipeId, StoredRecipe>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeStore for MemoryStore {
    async fn insert(&self, details: RecipeDetails) -> Result<RecipeId> {
        let id = RecipeId::new();
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        self.records.insert(
            id.clone(),
            StoredRecipe {
                seq,
                recipe: Recipe::new(id.clone(), details),
            },
        );

        tracing::debug!("Stored recipe {} (seq {})", id, seq);
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<Recipe>> {
        let mut entries: Vec<StoredRecipe> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|entry| entry.seq);

        Ok(entries.into_iter().map(|entry| entry.recipe).collect())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
