//! HTTP Surface
//!
//! Routes under `/api/recipes`. Unauthenticated, with CORS open to any origin.

use crate::search::engine::RecipeCatalog;
use crate::search::handlers::{handle_list, handle_search};
use crate::storage::store::RecipeStore;

use axum::http::Method;
use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const ENDPOINT_LIST: &str = "/api/recipes";
pub const ENDPOINT_SEARCH: &str = "/api/recipes/search";

pub fn router<S: RecipeStore>(catalog: Arc<RecipeCatalog<S>>) -> Router {
    Router::new()
        .route(ENDPOINT_LIST, get(handle_list::<S>))
        .route(ENDPOINT_SEARCH, get(handle_search::<S>))
        .layer(Extension(catalog))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
