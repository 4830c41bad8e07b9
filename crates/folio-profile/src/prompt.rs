//! System instruction composer.
//!
//! Turns a [`Portfolio`] into the instruction text handed to the model
//! when a conversation starts. The output depends only on the portfolio,
//! so the same content always yields byte-identical text.

use crate::model::{ExperienceEntry, Portfolio, ProjectEntry, SkillCategory, SkillEntry};

/// Build the assistant's system instruction from portfolio content.
pub fn compose_system_instruction(portfolio: &Portfolio) -> String {
    let name = &portfolio.profile.name;

    let sections = [
        identity_section(portfolio),
        profile_section(portfolio),
        guidelines_section(portfolio),
        examples_section(portfolio),
        format!("Remember: You are representing {name}. Be accurate, helpful, and professional!"),
    ];

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

fn identity_section(portfolio: &Portfolio) -> String {
    let name = &portfolio.profile.name;
    format!(
        "You are an intelligent AI assistant embedded in {name}'s interactive portfolio.\n\
         You represent {name} and help visitors (recruiters, potential employers, clients, \
         or fellow developers) learn about their professional background, skills, and projects.\n\
         \n\
         === IDENTITY & PERSONALITY ===\n\
         - You speak on behalf of {name}, using first-person perspective \
         (e.g., \"I have experience in...\", \"My projects include...\")\n\
         - Maintain a professional yet friendly, approachable tone\n\
         - Be enthusiastic about technology and development\n\
         - Show genuine interest in helping visitors\n\
         - Be conversational but concise"
    )
}

fn profile_section(portfolio: &Portfolio) -> String {
    let p = &portfolio.profile;
    let mut out = String::from("=== COMPLETE PROFESSIONAL PROFILE ===\n\n");

    out.push_str("PERSONAL INFORMATION:\n");
    out.push_str(&format!("- Full Name: {}\n", p.name));
    out.push_str(&format!("- Professional Role: {}\n", p.role));
    out.push_str(&format!("- Current Location: {}\n", p.location));
    out.push_str(&format!("- Professional Tagline: {}\n", p.tagline));
    out.push_str(&format!("- Email Contact: {}\n", p.email));
    out.push_str(&format!("- Bio: {}\n", p.bio));
    out.push_str(&format!(
        "- Links: GitHub {}, Twitter {}, LinkedIn {}\n",
        p.socials.github, p.socials.twitter, p.socials.linkedin
    ));

    out.push_str(&format!(
        "\nWORK EXPERIENCE ({} positions):\n",
        portfolio.experience.len()
    ));
    for (i, entry) in portfolio.experience.iter().enumerate() {
        out.push_str(&experience_block(i + 1, entry));
    }

    out.push_str(&format!(
        "\nPORTFOLIO PROJECTS ({} featured projects):\n",
        portfolio.projects.len()
    ));
    for (i, project) in portfolio.projects.iter().enumerate() {
        out.push_str(&project_block(i + 1, project));
    }

    out.push_str(&format!(
        "\nTECHNICAL SKILLS ({} core competencies):\n",
        portfolio.skills.len()
    ));
    for (i, skill) in portfolio.skills.iter().enumerate() {
        out.push_str(&skill_block(i + 1, skill));
    }

    out.push_str("\nSKILL CATEGORIES BREAKDOWN:\n");
    for category in SkillCategory::BUCKET_ORDER {
        let names: Vec<&str> = portfolio
            .skills_in(category)
            .map(|s| s.name.as_str())
            .collect();
        out.push_str(&format!("- {}: {}\n", category.title(), names.join(", ")));
    }

    out.truncate(out.trim_end().len());
    out
}

fn experience_block(index: usize, entry: &ExperienceEntry) -> String {
    format!(
        "{index}. {} at {}\n   \
         - Period: {}\n   \
         - Responsibilities: {}\n   \
         - Key Achievement: This role demonstrates expertise in {} and showcases growth in the tech industry.\n",
        entry.role,
        entry.company,
        entry.period,
        entry.description,
        entry.role.to_lowercase(),
    )
}

fn project_block(index: usize, project: &ProjectEntry) -> String {
    let showcased: Vec<&str> = project.tags.iter().take(2).map(String::as_str).collect();
    format!(
        "{index}. {}\n   \
         - Description: {}\n   \
         - Technologies Used: {}\n   \
         - This project showcases skills in: {}\n   \
         - Project demonstrates: {}\n",
        project.title,
        project.description,
        project.tags.join(", "),
        showcased.join(" and "),
        project_emphasis(&project.description),
    )
}

fn project_emphasis(description: &str) -> &'static str {
    if description.contains("real-time") {
        "real-time capabilities and performance optimization"
    } else if description.contains("AI") {
        "AI integration and modern APIs"
    } else {
        "modern development practices"
    }
}

fn skill_block(index: usize, skill: &SkillEntry) -> String {
    let mut out = format!(
        "{index}. {} - Proficiency: {}% ({})\n   - Category: {}\n",
        skill.name,
        skill.level,
        skill.tier(),
        skill.category,
    );
    for note in skill_notes(&skill.name) {
        out.push_str(&format!("   - {note}\n"));
    }
    out
}

fn skill_notes(name: &str) -> Vec<&'static str> {
    const NOTES: [(&str, &str); 4] = [
        ("React", "Primary framework for building modern UIs"),
        ("TypeScript", "Ensures type safety and code quality"),
        ("Tailwind", "Preferred styling approach for rapid development"),
        ("Three.js", "Used for 3D visualizations and interactive experiences"),
    ];
    NOTES
        .iter()
        .filter(|(needle, _)| name.contains(needle))
        .map(|(_, note)| *note)
        .collect()
}

fn guidelines_section(portfolio: &Portfolio) -> String {
    let email = &portfolio.profile.email;
    let location = &portfolio.profile.location;
    format!(
        "=== RESPONSE GUIDELINES ===\n\
         \n\
         1. ACCURACY & SPECIFICITY:\n   \
         - Always reference specific projects, roles, or technologies from the data above\n   \
         - Use exact company names, project titles, and technology names\n   \
         - Cite proficiency levels when discussing skills\n   \
         - Provide context and details, not generic responses\n\
         \n\
         2. QUESTION HANDLING:\n   \
         - About Experience: Reference specific roles, companies, periods, and achievements\n   \
         - About Projects: Describe the project, its purpose, technologies, and impact\n   \
         - About Skills: Mention proficiency level, category, and where it's been applied\n   \
         - About Technologies: Explain which projects use them and proficiency level\n   \
         - About Contact: Provide email ({email}) and express openness to opportunities\n   \
         - About Availability: Mention location ({location}) and openness to work\n   \
         - About Background: Share bio details and career progression through roles\n\
         \n\
         3. RESPONSE STRUCTURE:\n   \
         - For simple questions: 1-2 sentences with key details\n   \
         - For detailed questions: 3-4 sentences with examples and context\n   \
         - Always be factual and based on the provided data\n   \
         - Use bullet points if listing multiple items\n\
         \n\
         4. TONE & STYLE:\n   \
         - Professional but approachable\n   \
         - Enthusiastic about technology and development\n   \
         - Use emojis sparingly (1-2 per response max) for friendliness\n   \
         - First-person perspective (\"I\", \"my\", \"me\")\n   \
         - Avoid generic statements; be specific\n\
         \n\
         5. SPECIAL CASES:\n   \
         - If asked about something not in your knowledge: Politely redirect to available \
         information or suggest contacting via email ({email})\n   \
         - If asked about hiring/availability: Express openness and provide contact email ({email})\n   \
         - If asked for comparisons: Compare based on proficiency levels and experience\n   \
         - If asked for recommendations: Base on actual project experience and skills"
    )
}

fn examples_section(portfolio: &Portfolio) -> String {
    let mut out = String::from("=== EXAMPLE INTERACTIONS ===");

    if let Some(answer) = technologies_example(&portfolio.skills) {
        out.push_str(&format!(
            "\n\nQ: \"What technologies do you know?\"\nA: \"{answer}\""
        ));
    }
    if let Some(answer) = projects_example(&portfolio.projects) {
        out.push_str(&format!("\n\nQ: \"Tell me about your projects\"\nA: \"{answer}\""));
    }
    if let Some(answer) = experience_example(&portfolio.experience) {
        out.push_str(&format!("\n\nQ: \"What's your experience?\"\nA: \"{answer}\""));
    }
    out
}

fn technologies_example(skills: &[SkillEntry]) -> Option<String> {
    let mut ranked: Vec<&SkillEntry> = skills.iter().collect();
    // Stable sort keeps declaration order among equal levels.
    ranked.sort_by(|a, b| b.level.cmp(&a.level));

    let mut top = ranked.iter().take(3);
    let first = top.next()?;
    let mut parts = vec![format!("{} ({}% proficiency)", first.name, first.level)];
    parts.extend(top.map(|s| format!("{} ({}%)", s.name, s.level)));

    Some(format!(
        "I have strong expertise across the full stack! 💻 My top skills include {}.",
        join_natural(&parts)
    ))
}

fn projects_example(projects: &[ProjectEntry]) -> Option<String> {
    if projects.is_empty() {
        return None;
    }
    let summaries: Vec<String> = projects
        .iter()
        .map(|p| {
            let tech: Vec<&str> = p.tags.iter().take(2).map(String::as_str).collect();
            if tech.is_empty() {
                format!("{}: {}", p.title, p.description)
            } else {
                format!("{}, built with {}: {}", p.title, tech.join(" and "), p.description)
            }
        })
        .collect();
    Some(format!("I've built some exciting projects! 🚀 {}", summaries.join(" ")))
}

fn experience_example(experience: &[ExperienceEntry]) -> Option<String> {
    let (current, earlier) = experience.split_first()?;
    let mut answer = format!(
        "I'm currently a {} at {} ({}).",
        current.role, current.company, current.period
    );
    for entry in earlier {
        answer.push_str(&format!(
            " Previously, I was a {} at {} ({}).",
            entry.role, entry.company, entry.period
        ));
    }
    Some(answer)
}

fn join_natural(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
