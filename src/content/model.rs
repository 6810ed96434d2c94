// Content Model
// Plain data structures for the portfolio content, decoupled from rendering

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Content validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("skill '{name}' has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u8 },

    #[error("project '{title}' references unknown link key '{key}'")]
    UnknownProjectLink { title: String, key: String },
}

/// Identity and biography shown in the About panel and header
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    /// Full name
    pub name: String,

    /// One-line professional headline
    pub headline: String,

    /// Opening paragraph of the About panel
    pub intro: String,

    /// Short list of focus areas shown under the intro
    #[serde(default)]
    pub focus: Vec<String>,

    /// Closing paragraph of the About panel
    pub summary: String,

    /// Path to the profile photo, relative to the working directory
    pub photo_path: String,
}

/// External profile links, emitted verbatim and never fetched
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub github: String,
}

/// A named skill with a proficiency level in 0-100
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
}

/// One professional experience entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One featured project card
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,

    /// Key into the project link table
    pub link: String,
}

/// Mapping from project key to repository URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectLink {
    pub name: String,
    pub url: String,
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub program: String,
    pub period: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Contact details shown in the Contact panel
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub location: String,
    pub email: String,
    pub phone: String,
}

/// The complete portfolio content
/// Built once at startup and read-only thereafter; ordered collections
/// (skills, projects) keep their declaration order for display
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub social: SocialLinks,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub project_links: Vec<ProjectLink>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub contact: ContactInfo,
}

impl Portfolio {
    /// Load portfolio content from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read portfolio content: {}", path.display()))?;

        let portfolio: Portfolio = serde_yaml::from_str(&content)
            .context("Failed to parse portfolio content YAML")?;

        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Check invariants the render procedures rely on: skill levels stay in
    /// 0-100 and every project card resolves to a link table entry
    pub fn validate(&self) -> std::result::Result<(), ContentError> {
        for skill in &self.skills {
            if skill.level > 100 {
                return Err(ContentError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }

        for project in &self.projects {
            if self.project_url(&project.link).is_none() {
                return Err(ContentError::UnknownProjectLink {
                    title: project.title.clone(),
                    key: project.link.clone(),
                });
            }
        }

        Ok(())
    }

    /// Resolve a project link key to its URL
    pub fn project_url(&self, key: &str) -> Option<&str> {
        self.project_links
            .iter()
            .find(|link| link.name == key)
            .map(|link| link.url.as_str())
    }
}
