use super::engine::RecipeCatalog;
use super::types::{ListParams, ListResponse, SearchQuery, SearchResponse};
use crate::error::ApiError;
use crate::storage::store::RecipeStore;

use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_list<S: RecipeStore>(
    Query(params): Query<ListParams>,
    Extension(catalog): Extension<Arc<RecipeCatalog<S>>>,
) -> Result<Json<ListResponse>, ApiError> {
    let page = catalog.list(params.page, params.limit).await?;
    Ok(Json(page))
}

pub async fn handle_search<S: RecipeStore>(
    Query(query): Query<SearchQuery>,
    Extension(catalog): Extension<Arc<RecipeCatalog<S>>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let data = catalog.search(&query).await?;
    Ok(Json(SearchResponse { data }))
}
