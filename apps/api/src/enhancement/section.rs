use std::fmt;

/// The resume sections the engine knows how to enhance.
///
/// `Unknown` keeps the name it was given; the engine passes such content
/// through untouched rather than rejecting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Skills,
    Education,
    Unknown(String),
}

impl Section {
    /// Case-insensitive parse of a section name.
    pub fn parse(name: &str) -> Section {
        let normalized = name.to_lowercase();
        match normalized.as_str() {
            "summary" => Section::Summary,
            "experience" => Section::Experience,
            "skills" => Section::Skills,
            "education" => Section::Education,
            _ => Section::Unknown(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Unknown(name) => name.as_str(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Section::parse("SUMMARY"), Section::Summary);
        assert_eq!(Section::parse("Experience"), Section::Experience);
        assert_eq!(Section::parse("sKiLLs"), Section::Skills);
        assert_eq!(Section::parse("education"), Section::Education);
    }

    #[test]
    fn test_unknown_section_keeps_name() {
        assert_eq!(
            Section::parse("Hobbies"),
            Section::Unknown("hobbies".to_string())
        );
        assert_eq!(Section::parse("Hobbies").to_string(), "hobbies");
    }

    #[test]
    fn test_surrounding_whitespace_is_not_stripped() {
        assert_eq!(
            Section::parse(" summary"),
            Section::Unknown(" summary".to_string())
        );
        assert!(matches!(Section::parse("skills\n"), Section::Unknown(_)));
    }

    #[test]
    fn test_singular_skill_is_unknown() {
        assert!(matches!(Section::parse("skill"), Section::Unknown(_)));
    }
}
