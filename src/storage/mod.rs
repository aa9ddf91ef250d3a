//! Storage Module
//!
//! The document store the catalog reads from and the loader writes to.
//!
//! ## Core Concepts
//! - **Contract**: `RecipeStore` is the seam between the catalog and whatever
//!   holds the records. Handles are injected, never looked up globally.
//! - **Identity**: The store assigns each record a `RecipeId` on insert.
//! - **Ordering**: `MemoryStore` returns records in insertion order.

pub mod memory;
pub mod store;
