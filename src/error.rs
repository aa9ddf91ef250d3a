//! Error Types
//!
//! `CatalogError` covers everything that can stop the catalog from becoming
//! ready. Per-field seed problems and malformed search expressions are not
//! errors; they degrade to "unknown" or "no filter" where they occur.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read seed resource '{path}': {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed resource is not valid JSON: {0}")]
    SeedParse(#[from] serde_json::Error),
    #[error("seed resource must be a JSON array of recipe objects")]
    SeedShape,
    #[error("seed record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
    #[error("store failure: {0}")]
    Store(#[from] anyhow::Error),
}

/// Body of every non-2xx response produced by the API itself.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure surfaced by an HTTP handler. Always a server-side problem: the
/// request parameters themselves can't make a handler fail.
#[derive(Debug)]
pub struct ApiError(pub anyhow::Error);

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
