//! Portfolio data types.
//!
//! Everything here is immutable once loaded; the assistant only reads it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Links to the owner's social profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
}

impl Default for SocialLinks {
    fn default() -> Self {
        Self {
            github: "https://github.com".into(),
            twitter: "https://twitter.com".into(),
            linkedin: "https://linkedin.com".into(),
        }
    }
}

/// The person the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub socials: SocialLinks,
    #[serde(default = "default_profile_image")]
    pub profile_image: String,
}

fn default_profile_image() -> String {
    "./profile.jpg".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image_url: String,
    pub link: String,
}

/// One position in the work history. Lists are kept most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Design,
}

impl SkillCategory {
    /// Order the categories are grouped in when presented to the model.
    pub const BUCKET_ORDER: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Design,
        SkillCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Tools => "tools",
            Self::Design => "design",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
            Self::Design => "Design",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier label derived from a 0-100 skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyTier {
    Expert,
    Advanced,
    Proficient,
    Intermediate,
}

impl ProficiencyTier {
    pub fn from_level(level: u8) -> Self {
        match level {
            90.. => Self::Expert,
            80..=89 => Self::Advanced,
            70..=79 => Self::Proficient,
            _ => Self::Intermediate,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Proficient => "Proficient",
            Self::Intermediate => "Intermediate",
        }
    }
}

impl fmt::Display for ProficiencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
    pub category: SkillCategory,
}

impl SkillEntry {
    pub fn tier(&self) -> ProficiencyTier {
        ProficiencyTier::from_level(self.level)
    }
}

/// All content the site presents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
}

impl Portfolio {
    /// Skills in `category`, in declaration order.
    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &SkillEntry> {
        self.skills.iter().filter(move |s| s.category == category)
    }
}
