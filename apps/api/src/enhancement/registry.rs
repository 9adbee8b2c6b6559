//! Template Registry — the curated phrase pools, one table per section.
//!
//! Built once at startup (`TemplateRegistry::builtin()` or a JSON override)
//! and shared read-only as `Arc<TemplateRegistry>`. Pool order is significant:
//! the selector indexes positionally, so reordering a pool changes output.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::enhancement::EnhanceError;

// ────────────────────────────────────────────────────────────────────────────
// Curated pools
// ────────────────────────────────────────────────────────────────────────────

const SUMMARY_PREFIXES: &[&str] = &[
    "Dynamic and results-driven",
    "Innovative and detail-oriented",
    "Highly motivated and experienced",
    "Strategic and analytical",
    "Creative and solution-focused",
];

const SUMMARY_IMPROVEMENTS: &[&str] = &[
    "with a proven track record of delivering exceptional results",
    "demonstrating exceptional leadership and problem-solving capabilities",
    "with expertise in driving organizational growth and efficiency",
    "specializing in innovative solutions and strategic implementation",
    "with a passion for excellence and continuous improvement",
];

const ACTION_WORDS: &[&str] = &[
    "Spearheaded",
    "Orchestrated",
    "Pioneered",
    "Optimized",
    "Streamlined",
    "Collaborated",
    "Implemented",
    "Developed",
    "Managed",
    "Led",
];

const METRICS: &[&str] = &[
    "resulting in 25% increased efficiency",
    "leading to $50K+ cost savings annually",
    "improving team productivity by 30%",
    "reducing processing time by 40%",
    "achieving 95% client satisfaction rate",
];

const TECHNICAL_PREFIXES: &[&str] = &[
    "Advanced proficiency in",
    "Expert-level knowledge of",
    "Specialized expertise in",
];

const LEADERSHIP_PREFIXES: &[&str] = &[
    "Proven leadership in",
    "Demonstrated excellence in",
    "Strategic management of",
];

const COMMUNICATION_PREFIXES: &[&str] = &[
    "Exceptional communication skills in",
    "Professional proficiency in",
    "Advanced capabilities in",
];

const EDUCATION_ENHANCEMENTS: &[&str] = &[
    "with academic excellence and leadership recognition",
    "including relevant coursework in advanced topics",
    "with honors and distinguished academic performance",
    "complemented by practical project experience",
    "with focus on industry-relevant applications",
];

// ────────────────────────────────────────────────────────────────────────────
// Data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTemplates {
    pub prefixes: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceTemplates {
    pub action_words: Vec<String>,
    pub metrics: Vec<String>,
}

/// A named skill category and its prefix pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub prefixes: Vec<String>,
}

/// Categories are an ordered list, not a map: skills are assigned to them
/// round-robin by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTemplates {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationTemplates {
    pub enhancements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRegistry {
    pub summary: SummaryTemplates,
    pub experience: ExperienceTemplates,
    pub skills: SkillTemplates,
    pub education: EducationTemplates,
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

impl TemplateRegistry {
    /// The curated pools shipped with the service.
    pub fn builtin() -> Self {
        TemplateRegistry {
            summary: SummaryTemplates {
                prefixes: owned(SUMMARY_PREFIXES),
                improvements: owned(SUMMARY_IMPROVEMENTS),
            },
            experience: ExperienceTemplates {
                action_words: owned(ACTION_WORDS),
                metrics: owned(METRICS),
            },
            skills: SkillTemplates {
                categories: vec![
                    SkillCategory {
                        name: "Technical".to_string(),
                        prefixes: owned(TECHNICAL_PREFIXES),
                    },
                    SkillCategory {
                        name: "Leadership".to_string(),
                        prefixes: owned(LEADERSHIP_PREFIXES),
                    },
                    SkillCategory {
                        name: "Communication".to_string(),
                        prefixes: owned(COMMUNICATION_PREFIXES),
                    },
                ],
            },
            education: EducationTemplates {
                enhancements: owned(EDUCATION_ENHANCEMENTS),
            },
        }
    }

    /// Loads a replacement registry from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read template file '{}'", path.display()))?;
        let registry: TemplateRegistry = serde_json::from_str(&raw)
            .with_context(|| format!("Template file '{}' is not valid JSON", path.display()))?;
        registry
            .validate()
            .with_context(|| format!("Template file '{}' is incomplete", path.display()))?;
        Ok(registry)
    }

    /// Rejects a registry where any pool (or the category list) is empty.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        let pools: [(&str, usize); 5] = [
            ("summary.prefixes", self.summary.prefixes.len()),
            ("summary.improvements", self.summary.improvements.len()),
            ("experience.action_words", self.experience.action_words.len()),
            ("experience.metrics", self.experience.metrics.len()),
            ("education.enhancements", self.education.enhancements.len()),
        ];
        if let Some((name, _)) = pools.iter().find(|(_, len)| *len == 0) {
            return Err(EnhanceError::EmptyPool(name.to_string()));
        }

        if self.skills.categories.is_empty() {
            return Err(EnhanceError::EmptyPool("skills.categories".to_string()));
        }
        for category in &self.skills.categories {
            if category.prefixes.is_empty() {
                return Err(EnhanceError::EmptyPool(format!(
                    "skills.{}",
                    category.name
                )));
            }
        }

        Ok(())
    }
}
