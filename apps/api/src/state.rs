use std::sync::Arc;

use crate::enhancement::registry::TemplateRegistry;
use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Template pools, built once at startup and never mutated.
    pub registry: Arc<TemplateRegistry>,
    /// Pluggable resume persistence. Default: FileResumeStore under STORAGE_DIR.
    pub store: Arc<dyn ResumeStore>,
}
