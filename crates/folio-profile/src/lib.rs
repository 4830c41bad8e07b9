//! Portfolio content for Folio.
//!
//! Holds the static data the site presents (profile, projects, work
//! history, skills), the built-in default content, loading of an
//! operator-supplied TOML content file, and the composer that turns the
//! content into the assistant's system instruction.

pub mod content;
pub mod loader;
pub mod model;
pub mod prompt;

pub use loader::{load_portfolio, validate_portfolio};
pub use model::{
    ExperienceEntry, Portfolio, ProficiencyTier, Profile, ProjectEntry, SkillCategory,
    SkillEntry, SocialLinks,
};
pub use prompt::compose_system_instruction;
