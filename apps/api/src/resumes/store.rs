//! Resume Store — pluggable persistence for saved resume documents.
//!
//! Default: `FileResumeStore` (one pretty-printed JSON file per resume, plus
//! an in-memory cache in front of the directory).
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::models::resume::{ResumeSummary, RESUME_FORMAT_VERSION};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid resume id '{0}'")]
    InvalidId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Stores a resume document and returns its id. A missing id is
    /// generated from the current local time.
    async fn save(
        &self,
        resume_data: Map<String, Value>,
        resume_id: Option<String>,
    ) -> Result<String, StorageError>;

    async fn get(&self, resume_id: &str) -> Result<Option<Value>, StorageError>;

    async fn list(&self) -> Result<Vec<ResumeSummary>, StorageError>;
}

/// Ids become file names, so only `[A-Za-z0-9_-]` is accepted.
pub fn validate_resume_id(resume_id: &str) -> Result<(), StorageError> {
    let valid = !resume_id.is_empty()
        && resume_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidId(resume_id.to_string()))
    }
}

fn generate_resume_id() -> String {
    format!("resume_{}", Local::now().format("%Y%m%d_%H%M%S"))
}

// ────────────────────────────────────────────────────────────────────────────
// FileResumeStore
// ────────────────────────────────────────────────────────────────────────────

pub struct FileResumeStore {
    dir: PathBuf,
    cache: RwLock<HashMap<String, Value>>,
}

impl FileResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileResumeStore {
            dir: dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, resume_id: &str) -> PathBuf {
        self.dir.join(format!("{resume_id}.json"))
    }
}

#[async_trait]
impl ResumeStore for FileResumeStore {
    async fn save(
        &self,
        mut resume_data: Map<String, Value>,
        resume_id: Option<String>,
    ) -> Result<String, StorageError> {
        let resume_id = resume_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(generate_resume_id);
        validate_resume_id(&resume_id)?;

        resume_data.insert("id".to_string(), Value::String(resume_id.clone()));
        resume_data.insert(
            "last_updated".to_string(),
            Value::String(Local::now().to_rfc3339()),
        );
        resume_data.insert(
            "version".to_string(),
            Value::String(RESUME_FORMAT_VERSION.to_string()),
        );
        let document = Value::Object(resume_data);

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(&resume_id);
        tokio::fs::write(&path, serde_json::to_vec_pretty(&document)?).await?;

        self.cache.write().await.insert(resume_id.clone(), document);
        info!("Saved resume {resume_id} to {}", path.display());

        Ok(resume_id)
    }

    async fn get(&self, resume_id: &str) -> Result<Option<Value>, StorageError> {
        validate_resume_id(resume_id)?;

        if let Some(document) = self.cache.read().await.get(resume_id) {
            return Ok(Some(document.clone()));
        }

        let raw = match tokio::fs::read_to_string(self.path_for(resume_id)).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let document: Value = serde_json::from_str(&raw)?;

        self.cache
            .write()
            .await
            .insert(resume_id.to_string(), document.clone());

        Ok(Some(document))
    }

    async fn list(&self) -> Result<Vec<ResumeSummary>, StorageError> {
        let mut dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Resume directory {} does not exist yet", self.dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut summaries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let raw = tokio::fs::read_to_string(&path).await?;
            let document: Value = serde_json::from_str(&raw)?;
            summaries.push(ResumeSummary::from_document(&document));
        }

        summaries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(summaries)
    }
}
