//! Recipe Model Tests
//!
//! Covers the JSON shape served to clients and calorie extraction from the
//! free-form nutrients map.

#[cfg(test)]
mod tests {
    use crate::fixtures::{recipe, with_nutrients};
    use crate::recipe::types::{Recipe, RecipeId};
    use serde_json::json;

    // ============================================================
    // SERIALIZATION
    // ============================================================

    #[test]
    fn test_recipe_serializes_flat_shape() {
        let recipe = recipe("Risotto", "Italian", Some(4.5));
        let value = serde_json::to_value(&recipe).unwrap();

        assert_eq!(value["id"], "Risotto");
        assert_eq!(value["title"], "Risotto");
        assert_eq!(value["country_state"], "Italy");
        assert_eq!(value["rating"], 4.5);
        assert!(value.get("details").is_none(), "details must be flattened");
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let recipe = recipe("Plain", "None", None);
        let value = serde_json::to_value(&recipe).unwrap();

        assert!(value["rating"].is_null());
        assert!(value["prep_time"].is_null());
        assert!(value["cook_time"].is_null());
        assert!(value["total_time"].is_null());
    }

    #[test]
    fn test_nested_values_preserved_verbatim() {
        let nutrients = json!({ "calories": "400 kcal", "extra": [1, 2, { "deep": true }] });
        let recipe = with_nutrients(recipe("Nested", "Any", None), nutrients.clone());

        let json = serde_json::to_string(&recipe).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.details.nutrients, nutrients);
        assert_eq!(restored, recipe);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(RecipeId::new(), RecipeId::new());
    }

    #[test]
    fn test_rating_or_zero() {
        assert_eq!(recipe("A", "x", Some(3.5)).rating_or_zero(), 3.5);
        assert_eq!(recipe("B", "x", None).rating_or_zero(), 0.0);
    }

    // ============================================================
    // CALORIES
    // ============================================================

    #[test]
    fn test_calories_strips_unit() {
        let r = with_nutrients(recipe("A", "x", None), json!({ "calories": "350 kcal" }));
        assert_eq!(r.calories(), Some(350.0));
    }

    #[test]
    fn test_calories_keeps_decimal_point() {
        let r = with_nutrients(recipe("A", "x", None), json!({ "calories": "~412.5kcal" }));
        assert_eq!(r.calories(), Some(412.5));
    }

    #[test]
    fn test_calories_none_when_not_a_map() {
        let r = with_nutrients(recipe("A", "x", None), json!("350 kcal"));
        assert_eq!(r.calories(), None);

        let r = with_nutrients(recipe("A", "x", None), json!(["350 kcal"]));
        assert_eq!(r.calories(), None);
    }

    #[test]
    fn test_calories_none_when_entry_missing_or_not_text() {
        let r = with_nutrients(recipe("A", "x", None), json!({ "fatContent": "10 g" }));
        assert_eq!(r.calories(), None);

        let r = with_nutrients(recipe("A", "x", None), json!({ "calories": 350 }));
        assert_eq!(r.calories(), None);
    }

    #[test]
    fn test_calories_none_when_digits_do_not_parse() {
        let r = with_nutrients(recipe("A", "x", None), json!({ "calories": "unknown" }));
        assert_eq!(r.calories(), None);

        let r = with_nutrients(recipe("A", "x", None), json!({ "calories": "1.2.3 kcal" }));
        assert_eq!(r.calories(), None);
    }
}
