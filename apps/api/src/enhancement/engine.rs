//! Single entry point of the enhancement engine.
//!
//! Pure and stateless apart from the shared read-only registry, so it can be
//! called concurrently from any number of request handlers without locking.

use tracing::debug;

use crate::enhancement::education::enhance_education;
use crate::enhancement::experience::enhance_experience;
use crate::enhancement::registry::TemplateRegistry;
use crate::enhancement::section::Section;
use crate::enhancement::skills::enhance_skills;
use crate::enhancement::summary::enhance_summary;
use crate::enhancement::EnhanceError;

/// Enhances `content` for the named resume section.
///
/// Content is trimmed first; empty content is rejected. Unrecognized
/// sections return the trimmed content unchanged.
pub fn enhance(
    registry: &TemplateRegistry,
    section: &str,
    content: &str,
) -> Result<String, EnhanceError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(EnhanceError::EmptyContent);
    }

    let section = Section::parse(section);
    debug!(%section, chars = content.chars().count(), "Enhancing section");

    match section {
        Section::Summary => enhance_summary(content, registry),
        Section::Experience => enhance_experience(content, registry),
        Section::Skills => enhance_skills(content, registry),
        Section::Education => enhance_education(content, registry),
        Section::Unknown(_) => Ok(content.to_string()),
    }
}
