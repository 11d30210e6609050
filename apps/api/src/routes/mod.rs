pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::generation::handlers as generation;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation
        .route(
            "/api/generate-roadmap",
            post(generation::handle_generate_roadmap),
        )
        .route("/api/chat", post(generation::handle_chat))
        // Stored roadmaps
        .route(
            "/api/roadmaps",
            get(generation::handle_list_roadmaps).delete(generation::handle_clear_roadmaps),
        )
        .route(
            "/api/roadmaps/:id",
            get(generation::handle_get_roadmap).delete(generation::handle_delete_roadmap),
        )
        // Export
        .route("/api/generate-pdf", post(render::handle_generate_pdf))
        // Resource library
        .route("/api/resources", get(catalog::handle_list_resources))
        .route(
            "/api/resources/search",
            get(catalog::handle_search_resources),
        )
        .route("/api/resources/:id", get(catalog::handle_get_resource))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
