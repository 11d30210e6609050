use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::Roadmap;
use crate::render::render_roadmap_pdf;
use crate::state::AppState;

/// POST /api/generate-pdf
///
/// Body: a roadmap object as returned by `/api/generate-roadmap`.
/// Nothing is read from the store, so edited roadmaps render as sent.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    let roadmap: Roadmap = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("Invalid roadmap structure: {e}")))?;
    if roadmap.goal.trim().is_empty() {
        return Err(AppError::Validation(
            "Invalid roadmap structure: goal is required".to_string(),
        ));
    }

    let roadmap_id = roadmap.id.clone();
    let milestone_count = roadmap.milestones.len();
    let config = state.page_config.clone();

    let pdf = tokio::task::spawn_blocking(move || render_roadmap_pdf(&roadmap, &config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF render: {e}")))??;

    info!(
        "Rendered PDF for roadmap {}: {} milestones, {} bytes",
        roadmap_id,
        milestone_count,
        pdf.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download_filename(&roadmap_id)),
        ),
    ];
    Ok((headers, Bytes::from(pdf)).into_response())
}

/// `career-roadmap-<id>.pdf`, keeping only `[A-Za-z0-9_-]` from the id so the
/// header value stays valid and the quoted filename cannot be broken out of.
fn download_filename(roadmap_id: &str) -> String {
    let safe_id: String = roadmap_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("career-roadmap-{safe_id}.pdf")
}
