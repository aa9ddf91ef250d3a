//! Seed Data Types
//!
//! Where the seed comes from and the key names it uses.

use crate::error::CatalogError;
use std::path::PathBuf;

/// The seed file compiled into the binary.
pub const BUNDLED_SEED: &str = include_str!("../../data/recipes.json");

/// Key holding the continent. The misspelling is part of the seed format.
pub const KEY_CONTINENT: &str = "Contient";
pub const KEY_COUNTRY_STATE: &str = "Country_State";
pub const KEY_URL: &str = "URL";
pub const KEY_CUISINE: &str = "cuisine";
pub const KEY_TITLE: &str = "title";
pub const KEY_RATING: &str = "rating";
pub const KEY_PREP_TIME: &str = "prep_time";
pub const KEY_COOK_TIME: &str = "cook_time";
pub const KEY_TOTAL_TIME: &str = "total_time";
pub const KEY_DESCRIPTION: &str = "description";
pub const KEY_NUTRIENTS: &str = "nutrients";
pub const KEY_INGREDIENTS: &str = "ingredients";
pub const KEY_INSTRUCTIONS: &str = "instructions";
pub const KEY_SERVES: &str = "serves";

/// Where the loader reads the seed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The `data/recipes.json` file shipped inside the binary.
    Bundled,
    /// A seed file on disk.
    File(PathBuf),
}

impl SeedSource {
    /// Returns the raw seed text.
    pub async fn read(&self) -> Result<String, CatalogError> {
        match self {
            SeedSource::Bundled => Ok(BUNDLED_SEED.to_string()),
            SeedSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::SeedRead {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SeedSource::Bundled => "bundled recipes.json".to_string(),
            SeedSource::File(path) => path.display().to_string(),
        }
    }
}

impl From<Option<PathBuf>> for SeedSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map(SeedSource::File).unwrap_or(SeedSource::Bundled)
    }
}
