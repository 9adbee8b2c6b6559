pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::enhancement::handlers as enhancement;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api", get(health::root_handler))
        // Enhancement API
        .route("/api/ai-enhance", post(enhancement::handle_enhance))
        // Resume API
        .route("/api/save-resume", post(resumes::handle_save_resume))
        .route("/api/resume/:id", get(resumes::handle_get_resume))
        .route("/api/resumes", get(resumes::handle_list_resumes))
        .with_state(state)
}
