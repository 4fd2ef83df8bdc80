//! Portfolio content model
//!
//! The page content (profile, project cards, experience timeline, contact
//! details) is data, not code: a built-in default is compiled in and an
//! alternative JSON file can be pointed at via the user config. Everything
//! is loaded once at startup, before the first frame.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Address the contact form hands messages to when the config does not
/// override it.
pub const DEFAULT_RECIPIENT: &str = "siddharthsaravanan27@gmail.com";

/// ASCII portrait shown in the hero section (the web page preloads a
/// portrait image; here the art ships with the binary).
pub const HERO_PORTRAIT: &[&str] = &[
    "  .--------.  ",
    " /  .----.  \\ ",
    "|  | o  o |  |",
    "|  |  __  |  |",
    " \\  '----'  / ",
    "  '-./||\\.-'  ",
    "   /  ||  \\   ",
];

/// Who the portfolio belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// First line of the hero title (typed out character by character)
    pub title_line1: String,
    /// Second line of the hero title
    pub title_line2: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub github: String,
    /// Short paragraphs for the About section
    pub summary: Vec<String>,
}

/// One project card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: Option<String>,
}

/// One entry in the experience timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub start: NaiveDate,
    /// None means the position is current
    pub end: Option<NaiveDate>,
    pub highlights: Vec<String>,
}

impl ExperienceEntry {
    /// Human-readable date span, e.g. "Jun 2023 – Present"
    pub fn period(&self) -> String {
        let start = self.start.format("%b %Y");
        match &self.end {
            Some(end) => format!("{start} – {}", end.format("%b %Y")),
            None => format!("{start} – Present"),
        }
    }
}

/// The whole page's content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<ProjectCard>,
    pub experience: Vec<ExperienceEntry>,
}

impl Portfolio {
    /// Load content from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read content file {}", path.display()))?;
        let portfolio: Portfolio = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse content file {}", path.display()))?;
        Ok(portfolio)
    }

    /// Built-in content used when no content file is configured
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Siddharth Saravanan".to_string(),
                title_line1: "Hi, I'm Siddharth".to_string(),
                title_line2: "I build things for the web".to_string(),
                tagline: "Full-stack developer with a soft spot for clean interfaces".to_string(),
                location: "Chennai, India".to_string(),
                email: DEFAULT_RECIPIENT.to_string(),
                github: "github.com/siddharth-s".to_string(),
                summary: vec![
                    "I'm a developer who enjoys taking ideas from a sketch on paper \
                     to something people actually use."
                        .to_string(),
                    "Most of my work lives at the intersection of product thinking \
                     and engineering: fast interfaces, small tools, and the glue \
                     code nobody notices until it breaks."
                        .to_string(),
                ],
            },
            projects: vec![
                ProjectCard {
                    title: "Taskline".to_string(),
                    description: "A keyboard-first task tracker with offline sync \
                                  and a tiny footprint."
                        .to_string(),
                    tech: vec!["TypeScript".into(), "IndexedDB".into(), "Vite".into()],
                    link: Some("github.com/siddharth-s/taskline".to_string()),
                },
                ProjectCard {
                    title: "Plotfolio".to_string(),
                    description: "Static-site generator that turns a folder of \
                                  notebooks into a browsable research portfolio."
                        .to_string(),
                    tech: vec!["Python".into(), "Jinja".into()],
                    link: Some("github.com/siddharth-s/plotfolio".to_string()),
                },
                ProjectCard {
                    title: "Pingboard".to_string(),
                    description: "Self-hosted uptime dashboard with alerting over \
                                  email and a one-binary deploy."
                        .to_string(),
                    tech: vec!["Go".into(), "SQLite".into()],
                    link: None,
                },
            ],
            experience: vec![
                ExperienceEntry {
                    role: "Software Engineer".to_string(),
                    organization: "Hexaware Labs".to_string(),
                    start: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap_or_default(),
                    end: None,
                    highlights: vec![
                        "Own the customer-facing dashboard used by ~40k monthly users".to_string(),
                        "Cut page load times roughly in half by reworking the asset pipeline"
                            .to_string(),
                    ],
                },
                ExperienceEntry {
                    role: "Engineering Intern".to_string(),
                    organization: "Zoho".to_string(),
                    start: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap_or_default(),
                    end: NaiveDate::from_ymd_opt(2022, 12, 1),
                    highlights: vec![
                        "Built internal tooling for localization review".to_string(),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_content_is_complete() {
        let content = Portfolio::builtin();
        assert!(!content.profile.name.is_empty());
        assert!(!content.profile.title_line1.is_empty());
        assert!(!content.profile.title_line2.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.experience.is_empty());
        assert_eq!(content.profile.email, DEFAULT_RECIPIENT);
    }

    #[test]
    fn test_period_with_end_date() {
        let entry = ExperienceEntry {
            role: "Dev".to_string(),
            organization: "Acme".to_string(),
            start: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2022, 12, 1),
            highlights: vec![],
        };
        assert_eq!(entry.period(), "May 2022 – Dec 2022");
    }

    #[test]
    fn test_period_without_end_is_present() {
        let entry = ExperienceEntry {
            role: "Dev".to_string(),
            organization: "Acme".to_string(),
            start: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            end: None,
            highlights: vec![],
        };
        assert_eq!(entry.period(), "Jun 2023 – Present");
    }

    #[test]
    fn test_content_round_trips_through_json() {
        let content = Portfolio::builtin();
        let json = serde_json::to_string(&content).unwrap();
        let parsed: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.profile.name, content.profile.name);
        assert_eq!(parsed.projects.len(), content.projects.len());
        assert_eq!(parsed.experience.len(), content.experience.len());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Portfolio::load(Path::new("/nonexistent/content.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_portrait_is_nonempty() {
        assert!(!HERO_PORTRAIT.is_empty());
    }
}
