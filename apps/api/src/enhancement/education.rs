//! Education transformer: appends one enhancement phrase per non-blank line.

use crate::enhancement::registry::TemplateRegistry;
use crate::enhancement::selector::pick;
use crate::enhancement::EnhanceError;

pub fn enhance_education(
    content: &str,
    registry: &TemplateRegistry,
) -> Result<String, EnhanceError> {
    let pool = &registry.education.enhancements;

    let lines = content
        .split('\n')
        .map(|line| -> Result<String, EnhanceError> {
            if line.trim().is_empty() {
                return Ok(line.to_string());
            }
            let enhancement = pick("education.enhancements", pool, line)?;
            Ok(format!("{line} {enhancement}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enhance(content: &str) -> String {
        enhance_education(content, &TemplateRegistry::builtin()).unwrap()
    }

    #[test]
    fn test_single_line() {
        assert_eq!(
            enhance("MBA Finance"),
            "MBA Finance with honors and distinguished academic performance"
        );
    }

    #[test]
    fn test_lines_keep_order_and_blanks() {
        // "BS Computer Science" = 1758 % 5 = 3, "MIT 2019" = 470 % 5 = 0
        let out = enhance("BS Computer Science\n\nMIT 2019");
        assert_eq!(
            out,
            "BS Computer Science complemented by practical project experience\n\nMIT 2019 with academic excellence and leadership recognition"
        );
    }

    #[test]
    fn test_original_casing_kept() {
        assert!(enhance("Stanford University").starts_with("Stanford University "));
    }
}
