use super::coerce::{optional, parse_f32, parse_i32, raw_value, required_text};
use super::types::*;
use crate::error::CatalogError;
use crate::recipe::types::RecipeDetails;
use crate::storage::store::RecipeStore;

use serde_json::Value;
use std::sync::Arc;

/// Imports seed records into a store.
pub struct Loader<S> {
    store: Arc<S>,
}

impl<S: RecipeStore> Loader<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reads `source` and inserts every record it contains.
    ///
    /// # Returns
    /// * `Ok(n)` with the number of records inserted.
    /// * `Err` if the seed can't be read or parsed, a record lacks a required
    ///   field, or the store rejects an insert. Records inserted before the
    ///   failure are not rolled back.
    pub async fn load(&self, source: &SeedSource) -> Result<usize, CatalogError> {
        tracing::info!("Loading recipes from {}", source.describe());

        let text = source.read().await?;
        let inserted = self.load_str(&text).await?;

        tracing::info!(
            "Inserted {} recipes ({} in store)",
            inserted,
            self.store.len()
        );
        Ok(inserted)
    }

    /// Parses seed text and inserts its records in order.
    pub async fn load_str(&self, text: &str) -> Result<usize, CatalogError> {
        let root: Value = serde_json::from_str(text)?;
        let records = root.as_array().ok_or(CatalogError::SeedShape)?;

        let mut inserted = 0;
        for (index, record) in records.iter().enumerate() {
            let details = recipe_from_seed(index, record)?;
            let id = self.store.insert(details).await?;
            tracing::debug!("Seed record {} stored as {}", index, id);
            inserted += 1;
        }

        Ok(inserted)
    }
}

/// Builds `RecipeDetails` from one seed record.
///
/// `index` is only used to report which record was missing a field.
pub fn recipe_from_seed(index: usize, record: &Value) -> Result<RecipeDetails, CatalogError> {
    let record = record.as_object().ok_or(CatalogError::MissingField {
        index,
        field: KEY_CONTINENT,
    })?;

    Ok(RecipeDetails {
        continent: required_text(record, index, KEY_CONTINENT)?,
        country_state: required_text(record, index, KEY_COUNTRY_STATE)?,
        url: required_text(record, index, KEY_URL)?,
        cuisine: required_text(record, index, KEY_CUISINE)?,
        title: required_text(record, index, KEY_TITLE)?,
        rating: optional(record, KEY_RATING, parse_f32),
        prep_time: optional(record, KEY_PREP_TIME, parse_i32),
        cook_time: optional(record, KEY_COOK_TIME, parse_i32),
        total_time: optional(record, KEY_TOTAL_TIME, parse_i32),
        description: required_text(record, index, KEY_DESCRIPTION)?,
        nutrients: raw_value(record, KEY_NUTRIENTS),
        ingredients: raw_value(record, KEY_INGREDIENTS),
        instructions: raw_value(record, KEY_INSTRUCTIONS),
        serves: required_text(record, index, KEY_SERVES)?,
    })
}
