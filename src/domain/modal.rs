// SPDX-License-Identifier: MPL-2.0
//! Project details modal lifecycle.

use super::catalog::{Catalog, Project};

/// Which project, if any, the modal shows. Visible iff `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectModal {
    open: Option<String>,
}

impl ProjectModal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal on `key`. Unknown keys leave the modal untouched.
    pub fn open(&mut self, catalog: &Catalog, key: &str) -> bool {
        if !catalog.contains(key) {
            tracing::debug!(key, "ignoring unknown project key");
            return false;
        }
        self.open = Some(key.to_string());
        true
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Background scrolling is suppressed while the modal is shown.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.open.as_deref()
    }

    /// The record to render, read fresh from the catalog.
    #[must_use]
    pub fn project<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        self.open.as_deref().and_then(|key| catalog.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_project;

    fn catalog() -> Catalog {
        Catalog::new(vec![sample_project("engine", 4), sample_project("pipeline", 2)])
    }

    #[test]
    fn unknown_key_keeps_modal_hidden() {
        let mut modal = ProjectModal::new();
        assert!(!modal.open(&catalog(), "nope"));
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
    }

    #[test]
    fn known_key_renders_catalog_metrics() {
        let catalog = catalog();
        let mut modal = ProjectModal::new();
        assert!(modal.open(&catalog, "engine"));
        assert!(modal.scroll_locked());
        assert_eq!(modal.project(&catalog).map(|p| p.metrics.len()), Some(4));
    }

    #[test]
    fn reopening_replaces_content() {
        let catalog = catalog();
        let mut modal = ProjectModal::new();
        modal.open(&catalog, "engine");
        modal.open(&catalog, "pipeline");

        let project = modal.project(&catalog);
        assert_eq!(project.map(|p| p.title.as_str()), Some("Title pipeline"));
        assert_eq!(project.map(|p| p.metrics.len()), Some(2));
    }

    #[test]
    fn unknown_key_while_open_keeps_current_project() {
        let catalog = catalog();
        let mut modal = ProjectModal::new();
        modal.open(&catalog, "engine");
        modal.open(&catalog, "nope");
        assert_eq!(modal.key(), Some("engine"));
    }

    #[test]
    fn close_restores_scrolling() {
        let catalog = catalog();
        let mut modal = ProjectModal::new();
        modal.open(&catalog, "engine");
        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.scroll_locked());
        assert!(modal.project(&catalog).is_none());
    }
}
