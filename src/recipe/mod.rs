//! Recipe Data Model
//!
//! The single entity served by the catalog.
//!
//! ## Overview
//! A recipe is a handful of descriptive text fields, a few optional numeric
//! attributes (rating and preparation times) and three semi-structured blobs
//! (`nutrients`, `ingredients`, `instructions`) that are kept as raw JSON so
//! they round-trip exactly as they appeared in the seed data.
//!
//! ## Submodules
//! - **`types`**: `Recipe`, `RecipeDetails` and the store-assigned `RecipeId`.

pub mod types;

#[cfg(test)]
mod tests;
