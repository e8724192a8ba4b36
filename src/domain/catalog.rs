// SPDX-License-Identifier: MPL-2.0
//! Read-only project catalog.

use serde::Deserialize;
use std::collections::HashMap;

/// One line of a description list, optionally led by a bold label
/// (e.g. "Backend: Python, Apache Spark").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DescriptionItem {
    #[serde(default)]
    pub label: Option<String>,
    pub text: String,
}

/// A titled list in a project description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DescriptionSection {
    pub heading: String,
    #[serde(default)]
    pub items: Vec<DescriptionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub key: String,
    pub title: String,
    /// Short text shown on the project card.
    pub summary: String,
    /// First paragraph of the detailed description.
    pub overview: String,
    #[serde(default)]
    pub sections: Vec<DescriptionSection>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Metrics, in display order.
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// Projects indexed by key, keeping page order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog. When a key repeats, the first record wins.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        let mut index = HashMap::with_capacity(projects.len());
        let mut kept = Vec::with_capacity(projects.len());
        for project in projects {
            if index.contains_key(&project.key) {
                tracing::warn!(key = %project.key, "duplicate project key ignored");
                continue;
            }
            index.insert(project.key.clone(), kept.len());
            kept.push(project);
        }
        Self {
            projects: kept,
            index,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Project> {
        self.index.get(key).map(|&i| &self.projects[i])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Projects in page order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn sample_project(key: &str, metrics: usize) -> Project {
    Project {
        key: key.to_string(),
        title: format!("Title {key}"),
        summary: "Summary".to_string(),
        overview: "Overview".to_string(),
        sections: vec![DescriptionSection {
            heading: "Key Features".to_string(),
            items: vec![DescriptionItem {
                label: Some("Backend".to_string()),
                text: "Rust".to_string(),
            }],
        }],
        technologies: vec!["Rust".to_string(), "Iced".to_string()],
        metrics: (0..metrics)
            .map(|i| Metric {
                label: format!("Metric {i}"),
                value: format!("{i}%"),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_key() {
        let catalog = Catalog::new(vec![sample_project("a", 2), sample_project("b", 4)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("b").map(|p| p.metrics.len()), Some(4));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn page_order_is_preserved() {
        let catalog = Catalog::new(vec![sample_project("z", 1), sample_project("a", 1)]);
        let keys: Vec<&str> = catalog.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn duplicate_keys_keep_first_record() {
        let catalog = Catalog::new(vec![sample_project("a", 1), sample_project("a", 3)]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").map(|p| p.metrics.len()), Some(1));
    }
}
