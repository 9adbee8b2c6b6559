//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::resume::{
    ResumeListResponse, SaveResumeRequest, SaveResumeResponse,
};
use crate::state::AppState;

/// POST /api/save-resume
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let resume_id = state
        .store
        .save(request.resume_data, request.resume_id)
        .await?;

    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        resume_id,
    }))
}

/// GET /api/resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state
        .store
        .get(&resume_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.store.list().await?;
    Ok(Json(ResumeListResponse { resumes }))
}
