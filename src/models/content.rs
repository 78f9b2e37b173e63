//! Portfolio content data structures
//!
//! This module contains the data structures for loading and working with
//! the portfolio content document. Content is data, not code: everything
//! shown on screen (profile, roles, stats, skills, experience, projects)
//! comes from a JSON document, either a user-supplied file or the embedded
//! default.

use serde::Deserialize;
use std::io;
use std::path::Path;

/// Embedded default content document shipped with the binary
const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.json");

/// Current position shown in the hero card
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Position {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
}

/// Identity, links, and availability
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub position: Position,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// External scheduling page (surfaced as a link in the Contact section)
    #[serde(default)]
    pub scheduling_url: Option<String>,
    /// Downloadable resume, relative to the site root
    #[serde(default)]
    pub resume_path: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

/// Headline stat card ("10K+", "Daily Transactions")
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub gpa: String,
}

/// Project delivery status badge
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InDevelopment,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InDevelopment => "In Development",
        }
    }
}

/// Project showcase entry with its screenshot carousel metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    pub screenshot_folder: String,
    pub image_count: u32,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl Project {
    /// Path of the nth screenshot (1-based), as hosted by the site:
    /// `Corousal/<folder>/<n>.png`
    pub fn screenshot_path(&self, index: u32) -> String {
        format!("Corousal/{}/{}.png", self.screenshot_folder, index)
    }
}

/// Portfolio content document
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub profile: Profile,
    /// Role strings cycled by the hero typewriter
    pub roles: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Load content from a JSON file
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Parse the embedded default content document
    pub fn embedded() -> io::Result<Self> {
        serde_json::from_str(EMBEDDED_CONTENT)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_embedded_content_parses() {
        let portfolio = Portfolio::embedded().unwrap();
        assert_eq!(portfolio.profile.name, "Kshitij Kotecha");
        assert_eq!(portfolio.roles.len(), 4);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.stats.len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        fs::write(
            &path,
            r#"{
                "profile": {
                    "name": "Test Person",
                    "position": {
                        "title": "Engineer",
                        "company": "Acme",
                        "location": "Remote",
                        "period": "2025"
                    },
                    "email": "t@example.com",
                    "github": "https://github.com/t",
                    "linkedin": "https://linkedin.com/in/t"
                },
                "roles": ["Engineer"]
            }"#,
        )
        .unwrap();

        let portfolio = Portfolio::load(&path).unwrap();
        assert_eq!(portfolio.profile.name, "Test Person");
        assert!(portfolio.profile.scheduling_url.is_none());
        assert!(portfolio.projects.is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        fs::write(&path, "not json").unwrap();
        assert!(Portfolio::load(&path).is_err());
    }

    #[test]
    fn test_screenshot_path_is_one_based() {
        let project = Portfolio::embedded().unwrap().projects[0].clone();
        assert_eq!(project.screenshot_path(1), "Corousal/g1card/1.png");
        assert_eq!(project.screenshot_path(12), "Corousal/g1card/12.png");
    }

    #[test]
    fn test_project_status_parses_kebab_case() {
        let portfolio = Portfolio::embedded().unwrap();
        assert_eq!(portfolio.projects[0].status, ProjectStatus::InDevelopment);
        assert_eq!(portfolio.projects[1].status, ProjectStatus::Completed);
    }
}
