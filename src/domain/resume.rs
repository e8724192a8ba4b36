// SPDX-License-Identifier: MPL-2.0
//! Plain-text résumé generation and download.

use super::schedule::{Ticket, TicketIssuer};
use crate::error::ResumeError;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::PathBuf;

/// Name of the file written into the download directory.
pub const RESUME_FILE_NAME: &str = "Bhemeswararao_Ankireddy_Resume.txt";

/// Timestamp format of the footer line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResumeJob {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillLine {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResumeProject {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

/// Everything the résumé says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResumeContent {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ResumeJob>,
    #[serde(default)]
    pub skills: Vec<SkillLine>,
    #[serde(default)]
    pub projects: Vec<ResumeProject>,
    #[serde(default)]
    pub education: Vec<Education>,
}

fn push_heading(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push('\n');
}

/// Renders the résumé.
///
/// Sections always come in this order: header and contact details,
/// PROFESSIONAL SUMMARY, EXPERIENCE, SKILLS, PROJECTS, EDUCATION, then the
/// `Generated on:` footer.
#[must_use]
pub fn generate(resume: &ResumeContent, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();

    out.push_str(&resume.name.to_uppercase());
    out.push('\n');
    out.push_str(&resume.title);
    out.push_str("\n\n");
    out.push_str(&format!("Email: {}\n", resume.email));
    out.push_str(&format!("Phone: {}\n", resume.phone));
    out.push_str(&format!("Location: {}\n", resume.location));
    if let Some(linkedin) = &resume.linkedin {
        out.push_str(&format!("LinkedIn: {linkedin}\n"));
    }

    push_heading(&mut out, "PROFESSIONAL SUMMARY");
    out.push_str(&resume.summary);
    out.push('\n');

    push_heading(&mut out, "EXPERIENCE");
    for (i, job) in resume.experience.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} | {} | {}\n", job.role, job.company, job.period));
        if let Some(location) = &job.location {
            out.push_str(location);
            out.push('\n');
        }
        for highlight in &job.highlights {
            out.push_str(&format!("  - {highlight}\n"));
        }
    }

    push_heading(&mut out, "SKILLS");
    for line in &resume.skills {
        out.push_str(&format!("{}: {}\n", line.category, line.items.join(", ")));
    }

    push_heading(&mut out, "PROJECTS");
    for project in &resume.projects {
        out.push_str(&format!("{}\n  {}\n", project.name, project.description));
    }

    push_heading(&mut out, "EDUCATION");
    for education in &resume.education {
        out.push_str(&format!(
            "{}\n  {} | {}\n",
            education.degree, education.institution, education.period
        ));
    }

    out.push_str(&format!(
        "\nGenerated on: {}\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    out
}

/// Writes `text` as [`RESUME_FILE_NAME`] inside `dir`.
pub async fn save_to(dir: PathBuf, text: String) -> Result<PathBuf, ResumeError> {
    if text.trim().is_empty() {
        return Err(ResumeError::EmptyDocument);
    }

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|err| ResumeError::WriteFailed(err.to_string()))?;

    let path = dir.join(RESUME_FILE_NAME);
    tokio::fs::write(&path, text.as_bytes())
        .await
        .map_err(|err| ResumeError::WriteFailed(err.to_string()))?;

    Ok(path)
}

/// Like [`save_to`], failing when no download directory could be resolved.
pub async fn export(dir: Option<PathBuf>, text: String) -> Result<PathBuf, ResumeError> {
    match dir {
        Some(dir) => save_to(dir, text).await,
        None => Err(ResumeError::NoDownloadDirectory),
    }
}

/// State of the download control.
#[derive(Debug, Clone, Default)]
pub struct ResumeDownload {
    issuer: TicketIssuer,
    in_flight: Option<Ticket>,
}

impl ResumeDownload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a download as started; completions of older downloads become stale.
    pub fn start(&mut self) -> Ticket {
        let ticket = self.issuer.issue();
        self.in_flight = Some(ticket);
        ticket
    }

    /// Accepts the completion of `ticket`. Returns `false` for a stale one.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if self.issuer.is_current(ticket) && self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Whether the control shows the downloading label and is disabled.
    #[must_use]
    pub fn is_downloading(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
pub(crate) fn sample_resume() -> ResumeContent {
    ResumeContent {
        name: "Ada Lovelace".into(),
        title: "Senior Data Engineer".into(),
        email: "ada@example.com".into(),
        phone: "+1 555 0100".into(),
        location: "London".into(),
        linkedin: Some("linkedin.com/in/ada".into()),
        summary: "Builds pipelines.".into(),
        experience: vec![
            ResumeJob {
                role: "Lead Engineer".into(),
                company: "Engines Ltd".into(),
                period: "2021 - Present".into(),
                location: None,
                highlights: vec!["Shipped the engine".into()],
            },
            ResumeJob {
                role: "Engineer".into(),
                company: "Looms Inc".into(),
                period: "2018 - 2021".into(),
                location: Some("Remote".into()),
                highlights: Vec::new(),
            },
        ],
        skills: vec![SkillLine {
            category: "Languages".into(),
            items: vec!["Python".into(), "Scala".into()],
        }],
        projects: vec![ResumeProject {
            name: "Analytical Engine".into(),
            description: "General-purpose computation".into(),
        }],
        education: vec![Education {
            degree: "B.Tech".into(),
            institution: "University".into(),
            period: "2014 - 2018".into(),
        }],
    }
}
