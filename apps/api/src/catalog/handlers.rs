//! Axum route handlers for browsing and searching the resource library.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Resource;
use crate::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub resource: Resource,
    pub score: u32,
}

/// GET /api/resources
pub async fn handle_list_resources(State(state): State<AppState>) -> Json<Vec<Resource>> {
    Json(state.catalog.get_all().to_vec())
}

/// GET /api/resources/:id
pub async fn handle_get_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Result<Json<Resource>, AppError> {
    state
        .catalog
        .get_by_id(&resource_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resource {resource_id} not found")))
}

/// GET /api/resources/search?q=...&k=...
pub async fn handle_search_resources(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<SearchHit>>, AppError> {
    let Query(params) = query?;
    let k = params.k.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if k == 0 {
        return Err(AppError::Validation("k must be a positive integer".to_string()));
    }

    let hits = state
        .catalog
        .search_scored(&params.q, k)
        .into_iter()
        .map(|hit| SearchHit {
            resource: hit.resource.clone(),
            score: hit.score,
        })
        .collect();

    Ok(Json(hits))
}
