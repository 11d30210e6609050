//! Chat replies about a stored roadmap.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::ResourceCatalog;
use crate::errors::AppError;
use crate::generation::prompt_assembler::build_chat_prompt;
use crate::generation::prompts::CHAT_SYSTEM;
use crate::generation::GenerationError;
use crate::llm_client::{ChatMessage, CompletionRequest, GenerationGateway, LlmError};
use crate::store::RoadmapStore;

const CHAT_RESOURCE_LIMIT: usize = 5;
const CHAT_TEMPERATURE: f32 = 0.8;
const CHAT_MAX_TOKENS: u32 = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    #[serde(rename = "roadmapId", alias = "roadmap_id")]
    pub roadmap_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Answers a user message in the context of a stored roadmap.
///
/// The message itself is the ranker query (top 5). One gateway call, no retry.
pub async fn chat_reply(
    catalog: &ResourceCatalog,
    store: &RoadmapStore,
    gateway: &dyn GenerationGateway,
    request: ChatRequest,
) -> Result<ChatResponse, AppError> {
    let (message, roadmap_id) = match (request.message, request.roadmap_id) {
        (Some(message), Some(roadmap_id))
            if !message.trim().is_empty() && !roadmap_id.trim().is_empty() =>
        {
            (message, roadmap_id)
        }
        _ => {
            return Err(AppError::Validation(
                "Message and roadmapId are required".to_string(),
            ))
        }
    };

    let roadmap = store
        .get(&roadmap_id)
        .ok_or_else(|| AppError::NotFound(format!("Roadmap {roadmap_id} not found")))?;

    let resources = catalog.search(&message, CHAT_RESOURCE_LIMIT);
    let prompt = build_chat_prompt(&message, &roadmap, &resources);

    let completion = CompletionRequest {
        messages: vec![ChatMessage::system(CHAT_SYSTEM), ChatMessage::user(prompt)],
        temperature: CHAT_TEMPERATURE,
        max_tokens: CHAT_MAX_TOKENS,
    };
    let response = gateway
        .complete(&completion)
        .await
        .map_err(GenerationError::from)?;

    if response.trim().is_empty() {
        return Err(GenerationError::Gateway(LlmError::EmptyContent).into());
    }

    info!(
        "Chat reply for roadmap {} ({} resources offered)",
        roadmap_id,
        resources.len()
    );

    Ok(ChatResponse { response })
}
