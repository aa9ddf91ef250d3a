//! Ingestion Module
//!
//! One-shot import of the recipe seed file into the store at startup.
//!
//! ## Workflow
//! 1. **Read**: Load the seed text, either the copy bundled into the binary or a file on disk.
//! 2. **Parse**: Decode a JSON array of seed records.
//! 3. **Coerce**: Turn each record into `RecipeDetails`. Required text fields must be
//!    present; optional numbers that can't be read become absent.
//! 4. **Store**: Insert records one by one, in seed order.
//!
//! ## Known limitations
//! - Loading is not idempotent. Running it twice against the same store doubles the collection.
//! - A record missing a required field aborts the rest of the load. Records inserted
//!   before it stay in the store.

pub mod coerce;
pub mod loader;
pub mod types;
