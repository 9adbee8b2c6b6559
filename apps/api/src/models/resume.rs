use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version stamped on every saved resume document.
pub const RESUME_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub resume_data: Map<String, Value>,
    #[serde(default)]
    pub resume_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResumeResponse {
    pub message: String,
    pub resume_id: String,
}

/// One row of the saved-resume listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: Option<String>,
    pub name: String,
    pub last_updated: Option<String>,
    pub version: String,
}

impl ResumeSummary {
    /// Summarises a stored resume document. Missing fields fall back to
    /// `"Unknown"` for the name and the current format version.
    pub fn from_document(doc: &Value) -> Self {
        let str_field = |key: &str| doc.get(key).and_then(Value::as_str).map(str::to_string);

        ResumeSummary {
            id: str_field("id"),
            name: doc
                .get("personalInfo")
                .and_then(|p| p.get("fullName"))
                .and_then(Value::as_str)
                .unwrap_or("Unknown")
                .to_string(),
            last_updated: str_field("last_updated"),
            version: str_field("version").unwrap_or_else(|| RESUME_FORMAT_VERSION.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_reads_full_name() {
        let doc = json!({
            "id": "resume_1",
            "personalInfo": { "fullName": "Ada Lovelace" },
            "last_updated": "2024-01-01T00:00:00+00:00",
            "version": "1.0"
        });
        let summary = ResumeSummary::from_document(&doc);
        assert_eq!(summary.id.as_deref(), Some("resume_1"));
        assert_eq!(summary.name, "Ada Lovelace");
        assert_eq!(summary.version, "1.0");
    }

    #[test]
    fn test_summary_defaults() {
        let summary = ResumeSummary::from_document(&json!({}));
        assert_eq!(summary.id, None);
        assert_eq!(summary.name, "Unknown");
        assert_eq!(summary.last_updated, None);
        assert_eq!(summary.version, RESUME_FORMAT_VERSION);
    }
}
