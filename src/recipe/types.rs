use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"));

/// Opaque identifier assigned by the store when a recipe is inserted.
///
/// Wrapper around a UUID v4 string. Once assigned it never changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RecipeId(pub String);

impl RecipeId {
    /// Generates a new random UUID v4-based RecipeId.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the catalog knows about a recipe, minus its identifier.
///
/// This is what the loader builds from a seed record and hands to the store.
/// Optional numeric fields are either `None` or a finite number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeDetails {
    pub continent: String,
    pub country_state: String,
    pub url: String,
    pub cuisine: String,
    pub title: String,
    pub rating: Option<f32>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: String,
    /// Conventionally an object with a `"calories"` entry such as `"400 kcal"`.
    pub nutrients: serde_json::Value,
    pub ingredients: serde_json::Value,
    pub instructions: serde_json::Value,
    pub serves: String,
}

/// A stored recipe as returned by the store and served over HTTP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(flatten)]
    pub details: RecipeDetails,
}

impl Recipe {
    pub fn new(id: RecipeId, details: RecipeDetails) -> Self {
        Self { id, details }
    }

    /// Ordering key used by both listing and search; a missing rating sorts as 0.
    pub fn rating_or_zero(&self) -> f32 {
        self.details.rating.unwrap_or(0.0)
    }

    /// Numeric calorie value from the nutrients map.
    ///
    /// Returns `None` when `nutrients` is not an object, has no `"calories"`
    /// entry, the entry is not a string, or what remains after dropping every
    /// character other than digits and `.` does not parse.
    pub fn calories(&self) -> Option<f32> {
        let raw = self.details.nutrients.as_object()?.get("calories")?.as_str()?;
        let numeric = NON_NUMERIC.replace_all(raw, "");
        numeric.parse::<f32>().ok()
    }
}
