// SPDX-License-Identifier: MPL-2.0
//! Static site content.
//!
//! All page data (roles, stats, timeline, skills, project catalog, contact
//! cards, résumé facts) ships inside the binary as `assets/content/site.toml`
//! and is parsed once at startup. A parse failure is not fatal: the
//! application starts with empty content and reports the problem.

use crate::domain::catalog::Project;
use crate::domain::layout::ContentCounts;
use crate::domain::resume::ResumeContent;
use crate::error::{Error, Result};
use serde::Deserialize;

const SITE_TOML: &str = include_str!("../../assets/content/site.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Text shown before the typing animation ("I'm a").
    pub greeting: String,
    pub description: String,
    #[serde(default)]
    pub about: Vec<String>,
}

/// A headline number counted up on reveal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub target: u64,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Target fill of the progress bar, in percent.
    pub level: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactCard {
    pub icon: String,
    pub label: String,
    pub value: String,
}

/// Everything displayed on the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact: Vec<ContactCard>,
    #[serde(default)]
    pub resume: ResumeContent,
}

impl SiteContent {
    /// Element counts driving the page layout.
    #[must_use]
    pub fn counts(&self) -> ContentCounts {
        ContentCounts {
            timeline_items: self.experience.len(),
            skill_rows: self
                .skills
                .iter()
                .map(|category| category.skills.len())
                .max()
                .unwrap_or(0),
            projects: self.projects.len(),
            contact_cards: self.contact.len(),
        }
    }
}

/// Parses site content from TOML text.
pub fn parse(source: &str) -> Result<SiteContent> {
    toml::from_str(source).map_err(|err| Error::Content(err.to_string()))
}

/// Parses the content embedded in the binary.
pub fn load() -> Result<SiteContent> {
    parse(SITE_TOML)
}
