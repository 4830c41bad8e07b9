//! Built-in portfolio content, used when no content file is configured.

use crate::model::{
    ExperienceEntry, Portfolio, Profile, ProjectEntry, SkillCategory, SkillEntry, SocialLinks,
};

fn project(id: u32, title: &str, description: &str, tags: &[&str]) -> ProjectEntry {
    ProjectEntry {
        id,
        title: title.into(),
        description: description.into(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image_url: format!("https://picsum.photos/800/600?random={id}"),
        link: "#".into(),
    }
}

fn position(id: u32, role: &str, company: &str, period: &str, description: &str) -> ExperienceEntry {
    ExperienceEntry {
        id,
        role: role.into(),
        company: company.into(),
        period: period.into(),
        description: description.into(),
    }
}

fn skill(name: &str, level: u8, category: SkillCategory) -> SkillEntry {
    SkillEntry {
        name: name.into(),
        level,
        category,
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Steven Developer".into(),
                role: "Creative Engineer".into(),
                tagline: "I build pixel-perfect, engaging, and accessible digital experiences."
                    .into(),
                bio: "I'm a full-stack developer who treats code like art. With a focus on \
                      motion design and interactivity, I transform static concepts into \
                      living, breathing web applications. I love React, 3D graphics, and \
                      pushing the browser to its limits."
                    .into(),
                location: "San Francisco, CA".into(),
                email: "steven@example.com".into(),
                socials: SocialLinks::default(),
                profile_image: "./profile.jpg".into(),
            },
            projects: vec![
                project(
                    1,
                    "Nebula Dashboard",
                    "A real-time data visualization dashboard for tracking satellite \
                     telemetry. Built with WebGL and React.",
                    &["React", "Three.js", "WebSocket", "Tailwind"],
                ),
                project(
                    2,
                    "Echo Commerce",
                    "A headless e-commerce platform featuring AI-driven product \
                     recommendations and instant checkout.",
                    &["Next.js", "Stripe", "Gemini API", "PostgreSQL"],
                ),
                project(
                    3,
                    "Zenith UI Kit",
                    "An open-source accessible component library used by over 5,000 \
                     developers worldwide.",
                    &["TypeScript", "Storybook", "A11y", "NPM"],
                ),
            ],
            experience: vec![
                position(
                    1,
                    "Senior Frontend Engineer",
                    "TechNova Inc.",
                    "2021 - Present",
                    "Leading the core UI team, migrated legacy app to React 18, improved \
                     performance metrics by 40%.",
                ),
                position(
                    2,
                    "Creative Developer",
                    "Studio Pulse",
                    "2018 - 2021",
                    "Developed award-winning marketing sites for Fortune 500 clients using \
                     WebGL and GSAP.",
                ),
                position(
                    3,
                    "Full Stack Developer",
                    "StartUp Flow",
                    "2016 - 2018",
                    "Built the MVP from scratch, handling both React frontend and Node.js \
                     backend services.",
                ),
            ],
            skills: vec![
                skill("React / Next.js", 95, SkillCategory::Frontend),
                skill("TypeScript", 90, SkillCategory::Frontend),
                skill("Tailwind CSS", 95, SkillCategory::Design),
                skill("Node.js", 80, SkillCategory::Backend),
                skill("Three.js / WebGL", 75, SkillCategory::Frontend),
                skill("UI/UX Design", 85, SkillCategory::Design),
                skill("GenAI Integration", 85, SkillCategory::Tools),
                skill("GraphQL", 80, SkillCategory::Backend),
            ],
        }
    }
}
