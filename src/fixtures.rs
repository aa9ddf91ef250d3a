//! Shared builders for unit tests.

use crate::recipe::types::{Recipe, RecipeDetails, RecipeId};
use serde_json::{Value, json};

pub fn details(title: &str, cuisine: &str, rating: Option<f32>) -> RecipeDetails {
    RecipeDetails {
        continent: "Europe".to_string(),
        country_state: "Italy".to_string(),
        url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        cuisine: cuisine.to_string(),
        title: title.to_string(),
        rating,
        prep_time: None,
        cook_time: None,
        total_time: None,
        description: String::new(),
        nutrients: Value::Null,
        ingredients: json!([]),
        instructions: json!([]),
        serves: "4".to_string(),
    }
}

pub fn recipe(title: &str, cuisine: &str, rating: Option<f32>) -> Recipe {
    Recipe::new(RecipeId(title.to_string()), details(title, cuisine, rating))
}

pub fn with_total_time(mut recipe: Recipe, minutes: i32) -> Recipe {
    recipe.details.total_time = Some(minutes);
    recipe
}

pub fn with_nutrients(mut recipe: Recipe, nutrients: Value) -> Recipe {
    recipe.details.nutrients = nutrients;
    recipe
}

pub fn titles(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.details.title.as_str()).collect()
}
