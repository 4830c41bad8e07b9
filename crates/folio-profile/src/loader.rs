//! Loading portfolio content from a TOML file.

use std::collections::HashSet;
use std::path::Path;

use folio_common::ConfigError;
use tracing::info;

use crate::model::Portfolio;

/// Load content from `path`, or the built-in content when `path` is `None`.
///
/// Unlike the main config, content that fails validation is an error.
pub fn load_portfolio(path: Option<&Path>) -> Result<Portfolio, ConfigError> {
    let Some(path) = path else {
        return Ok(Portfolio::default());
    };

    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let portfolio: Portfolio = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse content TOML: {e}")))?;

    validate_portfolio(&portfolio)?;

    info!(
        projects = portfolio.projects.len(),
        experience = portfolio.experience.len(),
        skills = portfolio.skills.len(),
        "loaded portfolio content from {}",
        path.display()
    );
    Ok(portfolio)
}

/// Check content invariants, collecting every problem into one error.
pub fn validate_portfolio(portfolio: &Portfolio) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if portfolio.profile.name.trim().is_empty() {
        errors.push("profile.name must not be empty".into());
    }
    if !portfolio.profile.email.contains('@') {
        errors.push(format!(
            "profile.email = {:?} is not an email address",
            portfolio.profile.email
        ));
    }

    for skill in &portfolio.skills {
        if skill.level > 100 {
            errors.push(format!(
                "skills.{} level = {} is out of range [0, 100]",
                skill.name, skill.level
            ));
        }
    }

    let mut seen = HashSet::new();
    for project in &portfolio.projects {
        if !seen.insert(project.id) {
            errors.push(format!("duplicate project id {}", project.id));
        }
    }

    let mut seen = HashSet::new();
    for entry in &portfolio.experience {
        if !seen.insert(entry.id) {
            errors.push(format!("duplicate experience id {}", entry.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillCategory;

    const MINIMAL: &str = r#"
[profile]
name = "Ada Example"
role = "Systems Engineer"
tagline = "Making computers go."
bio = "I write compilers."
location = "Remote"
email = "ada@example.com"

[[projects]]
id = 7
title = "Tiny Lisp"
description = "A small Lisp interpreter."
tags = ["Rust", "Parsing"]
image_url = "https://example.com/lisp.png"
link = "https://example.com/lisp"

[[experience]]
id = 1
role = "Compiler Engineer"
company = "Acme"
period = "2020 - Present"
description = "Optimizer work."

[[skills]]
name = "Rust"
level = 92
category = "backend"
"#;

    #[test]
    fn none_path_returns_builtin_content() {
        let portfolio = load_portfolio(None).unwrap();
        assert_eq!(portfolio, Portfolio::default());
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let err = load_portfolio(Some(Path::new("/tmp/nonexistent_folio_content.toml")))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn loads_minimal_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, MINIMAL).unwrap();

        let portfolio = load_portfolio(Some(path.as_path())).unwrap();
        assert_eq!(portfolio.profile.name, "Ada Example");
        assert_eq!(portfolio.profile.socials.github, "https://github.com");
        assert_eq!(portfolio.projects[0].tags, vec!["Rust", "Parsing"]);
        assert_eq!(portfolio.skills[0].category, SkillCategory::Backend);
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, "[profile\nname = ").unwrap();

        let err = load_portfolio(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn out_of_range_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, MINIMAL.replace("level = 92", "level = 150")).unwrap();

        let err = load_portfolio(Some(path.as_path())).unwrap_err().to_string();
        assert!(err.contains("skills.Rust level = 150"));
    }

    #[test]
    fn collects_all_problems() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.email = "nobody".into();
        portfolio.projects[1].id = portfolio.projects[0].id;
        portfolio.experience[2].id = portfolio.experience[0].id;

        let err = validate_portfolio(&portfolio).unwrap_err().to_string();
        assert!(err.contains("profile.email"));
        assert!(err.contains("duplicate project id 1"));
        assert!(err.contains("duplicate experience id 1"));
    }
}
