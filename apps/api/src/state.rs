use std::sync::Arc;

use crate::catalog::ResourceCatalog;
use crate::llm_client::GenerationGateway;
use crate::render::PageConfig;
use crate::store::RoadmapStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; read-only afterwards.
    pub catalog: Arc<ResourceCatalog>,
    pub store: RoadmapStore,
    /// `OpenAiClient` in production, a scripted double in tests.
    pub gateway: Arc<dyn GenerationGateway>,
    pub page_config: PageConfig,
}
