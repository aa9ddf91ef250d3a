//! Search Service Module
//!
//! Listing and attribute search over the recipe collection.
//!
//! ## Overview
//! Every request materializes the full collection from the store, filters it in
//! memory, orders it by descending rating and, for listings, cuts out one page.
//!
//! ## Responsibilities
//! - **Filtering**: Case-insensitive substring match on title and cuisine, plus
//!   comparison expressions (`>=`, `<=`, `>`, `<`, `=`) on rating, total time and calories.
//! - **Ordering**: Stable sort by rating, missing ratings counting as 0.
//! - **Paging**: 1-based pages with out-of-range pages returning an empty slice.
//! - **API**: Axum handlers for the listing and search endpoints.
//!
//! ## Submodules
//! - **`engine`**: `RecipeCatalog`, sorting and pagination.
//! - **`filter`**: Comparison expression parsing and the fail-open filter chain.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Query parameters and response bodies.

pub mod engine;
pub mod filter;
pub mod handlers;
pub mod types;
