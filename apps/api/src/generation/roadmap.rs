//! Roadmap Generation — orchestrates the full roadmap pipeline.
//!
//! Flow: validate → rank resources → assemble prompt → gateway call →
//!       parse + structural check → default id/timestamp → ingest into store.
//!
//! The store is only touched once the output has parsed cleanly, so a failed
//! request never leaves a partial roadmap behind.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::catalog::ResourceCatalog;
use crate::errors::AppError;
use crate::generation::prompt_assembler::build_roadmap_prompt;
use crate::generation::prompts::ROADMAP_SYSTEM;
use crate::generation::GenerationError;
use crate::llm_client::{ChatMessage, CompletionRequest, GenerationGateway, LlmError};
use crate::models::{Milestone, Roadmap};
use crate::store::RoadmapStore;

/// How many library resources are offered to the model.
const ROADMAP_RESOURCE_LIMIT: usize = 10;
const ROADMAP_TEMPERATURE: f32 = 0.7;
const ROADMAP_MAX_TOKENS: u32 = 4000;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for roadmap generation. Everything is optional on the wire so
/// a missing goal is reported as a validation error rather than a rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapRequest {
    pub goal: Option<String>,
    pub background: Option<String>,
    pub timeline: Option<String>,
    pub weaknesses: Option<Vec<String>>,
}

/// Validated roadmap input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapInput {
    pub goal: String,
    pub background: Option<String>,
    pub timeline: Option<String>,
    pub weaknesses: Vec<String>,
}

impl RoadmapRequest {
    pub fn validate(self) -> Result<RoadmapInput, AppError> {
        let goal = self
            .goal
            .filter(|g| !g.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Goal is required".to_string()))?;

        let weaknesses = self
            .weaknesses
            .unwrap_or_default()
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        Ok(RoadmapInput {
            goal,
            background: self.background.filter(|b| !b.trim().is_empty()),
            timeline: self.timeline.filter(|t| !t.trim().is_empty()),
            weaknesses,
        })
    }
}

impl RoadmapInput {
    /// The ranker query: every present field, single-space joined.
    /// The ranker matches it as one substring.
    pub fn search_query(&self) -> String {
        let mut parts: Vec<&str> = vec![self.goal.as_str()];
        parts.extend(self.background.as_deref());
        parts.extend(self.timeline.as_deref());
        let weaknesses = self.weaknesses.join(" ");
        if !weaknesses.is_empty() {
            parts.push(&weaknesses);
        }
        parts.join(" ")
    }
}

/// Shape of the model's answer before defaults are applied.
#[derive(Debug, Deserialize)]
struct GeneratedRoadmap {
    #[serde(default)]
    id: Option<String>,
    goal: String,
    #[serde(default)]
    background: Option<String>,
    #[serde(default)]
    timeline: Option<String>,
    #[serde(default)]
    weaknesses: Option<Vec<String>>,
    milestones: Vec<Milestone>,
    #[serde(default)]
    generated_at: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the roadmap pipeline and stores the result.
///
/// Steps:
/// 1. validate the request (goal required)
/// 2. rank catalog resources against the combined input (top 10)
/// 3. assemble the roadmap prompt
/// 4. one gateway call, no retry
/// 5. parse + structural check
/// 6. default `id` / `generated_at`
/// 7. ingest: strip dangling resource links, store
pub async fn generate_roadmap(
    catalog: &ResourceCatalog,
    store: &RoadmapStore,
    gateway: &dyn GenerationGateway,
    request: RoadmapRequest,
) -> Result<Roadmap, AppError> {
    // Step 1: Validate
    let input = request.validate()?;
    info!("Generating roadmap for goal {:?}", input.goal);

    // Step 2: Rank resources
    let resources = catalog.search(&input.search_query(), ROADMAP_RESOURCE_LIMIT);
    info!("Offering {} library resources to the model", resources.len());

    // Step 3: Assemble prompt
    let prompt = build_roadmap_prompt(&input, &resources);

    // Step 4: Gateway call
    let completion = CompletionRequest {
        messages: vec![ChatMessage::system(ROADMAP_SYSTEM), ChatMessage::user(prompt)],
        temperature: ROADMAP_TEMPERATURE,
        max_tokens: ROADMAP_MAX_TOKENS,
    };
    let text = gateway
        .complete(&completion)
        .await
        .map_err(GenerationError::from)?;

    // Steps 5-6: Parse, check, default
    let roadmap = parse_roadmap(&text)?;

    // Step 7: Ingest
    let stored = store.ingest(roadmap, catalog);
    info!(
        "Stored roadmap {} with {} milestones",
        stored.id,
        stored.milestones.len()
    );

    Ok(stored)
}

/// Parses generation output into a `Roadmap`.
///
/// Non-JSON text → `GenerationError::Parse`. JSON without a non-empty `goal`
/// string and a `milestones` array → `GenerationError::InvalidStructure`.
/// No repair is attempted.
pub fn parse_roadmap(text: &str) -> Result<Roadmap, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::Gateway(LlmError::EmptyContent));
    }

    let value: Value = serde_json::from_str(text)?;

    let has_goal = value
        .get("goal")
        .and_then(Value::as_str)
        .is_some_and(|g| !g.trim().is_empty());
    let has_milestones = value.get("milestones").is_some_and(Value::is_array);
    if !has_goal || !has_milestones {
        return Err(GenerationError::InvalidStructure(
            "response must contain a goal and a milestones array".to_string(),
        ));
    }

    let generated: GeneratedRoadmap = serde_json::from_value(value)
        .map_err(|e| GenerationError::InvalidStructure(e.to_string()))?;

    let now = Utc::now();
    Ok(Roadmap {
        id: generated
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("roadmap_{}", now.timestamp_millis())),
        goal: generated.goal,
        background: generated.background,
        timeline: generated.timeline,
        weaknesses: generated.weaknesses,
        milestones: generated.milestones,
        generated_at: generated
            .generated_at
            .filter(|ts| !ts.trim().is_empty())
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
