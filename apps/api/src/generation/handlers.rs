//! Axum route handlers for roadmap generation, chat, and stored roadmaps.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::generation::chat::{chat_reply, ChatRequest, ChatResponse};
use crate::generation::roadmap::{generate_roadmap, RoadmapRequest};
use crate::models::Roadmap;
use crate::state::AppState;

/// POST /api/generate-roadmap
///
/// Full pipeline: rank resources → assemble prompt → generate → parse → store.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<Roadmap>, AppError> {
    let Json(request) = payload?;
    let roadmap = generate_roadmap(
        &state.catalog,
        &state.store,
        state.gateway.as_ref(),
        request,
    )
    .await?;
    Ok(Json(roadmap))
}

/// POST /api/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let reply = chat_reply(
        &state.catalog,
        &state.store,
        state.gateway.as_ref(),
        request,
    )
    .await?;
    Ok(Json(reply))
}

/// GET /api/roadmaps
pub async fn handle_list_roadmaps(State(state): State<AppState>) -> Json<Vec<Roadmap>> {
    Json(state.store.get_all())
}

/// GET /api/roadmaps/:id
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(roadmap_id): Path<String>,
) -> Result<Json<Roadmap>, AppError> {
    state
        .store
        .get(&roadmap_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {roadmap_id} not found")))
}

/// DELETE /api/roadmaps/:id
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    Path(roadmap_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.delete(&roadmap_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Roadmap {roadmap_id} not found")))
    }
}

/// DELETE /api/roadmaps
pub async fn handle_clear_roadmaps(State(state): State<AppState>) -> StatusCode {
    state.store.clear();
    StatusCode::NO_CONTENT
}
