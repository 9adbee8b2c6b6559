//! Experience transformer — works line by line.
//!
//! Each non-blank line may gain a leading action word and a trailing metric;
//! the two checks are independent. Blank lines pass through verbatim, so the
//! output always has the same number of lines as the input.

use crate::enhancement::registry::{ExperienceTemplates, TemplateRegistry};
use crate::enhancement::selector::pick;
use crate::enhancement::EnhanceError;

pub fn enhance_experience(
    content: &str,
    registry: &TemplateRegistry,
) -> Result<String, EnhanceError> {
    let templates = &registry.experience;

    let lines = content
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                Ok(line.to_string())
            } else {
                enhance_line(line, templates)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

fn enhance_line(line: &str, templates: &ExperienceTemplates) -> Result<String, EnhanceError> {
    // Case-sensitive: "led" inside "enrolled" does not count as "Led".
    let has_action_word = templates
        .action_words
        .iter()
        .any(|word| line.contains(word.as_str()));

    let mut enhanced = if has_action_word {
        line.to_string()
    } else {
        let action_word = pick("experience.action_words", &templates.action_words, line)?;
        format!("{action_word} {}", line.to_lowercase())
    };

    // Any Unicode digit counts, not just ASCII 0-9.
    let has_digit = line.chars().any(char::is_numeric);
    if !has_digit {
        let metric = pick("experience.metrics", &templates.metrics, line)?;
        enhanced.push_str(", ");
        enhanced.push_str(metric);
    }

    Ok(enhanced)
}
