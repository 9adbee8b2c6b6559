//! Axum route handlers for the Enhancement API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::enhancement::engine::enhance;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

/// POST /api/ai-enhance
///
/// Rewrites one section's text with curated template phrases.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let enhanced_content = enhance(&state.registry, &request.section, &request.content)?;

    info!(
        "Enhanced '{}' section ({} -> {} chars)",
        request.section,
        request.content.chars().count(),
        enhanced_content.chars().count()
    );

    Ok(Json(EnhanceResponse { enhanced_content }))
}
