//! Recipe Catalog Library
//!
//! This library crate defines the modules behind the `recipe-catalog` binary (`main.rs`).
//!
//! ## Architecture Modules
//! - **`recipe`**: The `Recipe` record and its semi-structured nutrient data.
//! - **`storage`**: The `RecipeStore` contract and an in-memory implementation.
//! - **`ingestion`**: One-shot import of the JSON seed file with best-effort field coercion.
//! - **`search`**: Rating-ordered listing with pagination, and attribute search driven by
//!   comparison expressions such as `>=4.5`.
//! - **`api`**: The Axum router exposing listing and search under `/api/recipes`.
//! - **`config`**: Command-line and environment configuration.
//! - **`error`**: Startup and request error types.
//!
//! Data flows one way: seed file → loader → store → catalog → HTTP response.

pub mod api;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod recipe;
pub mod search;
pub mod storage;

#[cfg(test)]
mod fixtures;
