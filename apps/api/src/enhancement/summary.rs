//! Summary transformer.
//!
//! Injects a descriptive prefix (unless one is already present) and always
//! closes with an improvement phrase. Both picks use the full content as
//! their key, and the two pools are the same size in the builtin registry,
//! so prefix N is always paired with improvement N.

use crate::enhancement::registry::TemplateRegistry;
use crate::enhancement::selector::pick;
use crate::enhancement::EnhanceError;

pub fn enhance_summary(content: &str, registry: &TemplateRegistry) -> Result<String, EnhanceError> {
    let templates = &registry.summary;
    let content_lower = content.to_lowercase();

    let has_prefix = templates
        .prefixes
        .iter()
        .any(|prefix| content_lower.contains(&prefix.to_lowercase()));

    let mut enhanced = if has_prefix {
        content.to_string()
    } else {
        let prefix = pick("summary.prefixes", &templates.prefixes, content)?;
        format!("{prefix} {content_lower}")
    };

    let improvement = pick("summary.improvements", &templates.improvements, content)?;
    enhanced.push(' ');
    enhanced.push_str(improvement);
    enhanced.push('.');

    Ok(enhanced)
}
