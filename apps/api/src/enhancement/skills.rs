//! Skills transformer.
//!
//! Splits the content into skills (comma or newline separated), assigns
//! categories round-robin by position, and prefixes each skill with a phrase
//! from its category's pool. Output is one skill per line, in input order.

use crate::enhancement::registry::TemplateRegistry;
use crate::enhancement::selector::pick;
use crate::enhancement::EnhanceError;

/// Splits on commas and newlines, trims, and drops empty tokens.
pub fn tokenize_skills(content: &str) -> Vec<&str> {
    content
        .split([',', '\n'])
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .collect()
}

pub fn enhance_skills(content: &str, registry: &TemplateRegistry) -> Result<String, EnhanceError> {
    let categories = &registry.skills.categories;
    if categories.is_empty() {
        return Err(EnhanceError::EmptyPool("skills.categories".to_string()));
    }

    let enhanced = tokenize_skills(content)
        .into_iter()
        .enumerate()
        .map(|(i, skill)| -> Result<String, EnhanceError> {
            let category = &categories[i % categories.len()];
            let pool_name = format!("skills.{}", category.name);
            let prefix = pick(&pool_name, &category.prefixes, skill)?;
            Ok(format!("{prefix} {skill}"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(enhanced.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enhance(content: &str) -> String {
        enhance_skills(content, &TemplateRegistry::builtin()).unwrap()
    }

    #[test]
    fn test_categories_cycle_in_order() {
        assert_eq!(
            enhance("Python, Leadership, Go"),
            "Advanced proficiency in Python\nStrategic management of Leadership\nAdvanced capabilities in Go"
        );
    }

    #[test]
    fn test_fourth_skill_wraps_to_technical() {
        // "Docker" = 600, 600 % 3 = 0
        let out = enhance("Python, Leadership, Go, Docker");
        assert_eq!(
            out.lines().last(),
            Some("Advanced proficiency in Docker")
        );
    }

    #[test]
    fn test_tokenize_mixed_separators() {
        assert_eq!(
            tokenize_skills(" Rust ,\nSQL\n\n, ,Docker,"),
            vec!["Rust", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_output_tokenizes_back_to_same_count_and_order() {
        let input = "Rust, SQL\nTeamwork, Public Speaking,\nMentoring";
        let out = enhance(input);
        let skills_in = tokenize_skills(input);
        let skills_out = tokenize_skills(&out);
        assert_eq!(skills_out.len(), skills_in.len());
        for (enhanced, original) in skills_out.iter().zip(&skills_in) {
            assert!(enhanced.ends_with(original), "{enhanced} / {original}");
        }
    }

    #[test]
    fn test_only_separators_gives_empty_output() {
        assert_eq!(enhance(",,\n,"), "");
    }

    #[test]
    fn test_empty_category_list_errors() {
        let mut r = TemplateRegistry::builtin();
        r.skills.categories.clear();
        assert!(enhance_skills("Rust", &r).is_err());
    }
}
