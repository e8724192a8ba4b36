// SPDX-License-Identifier: MPL-2.0
//! Fixed page geometry.
//!
//! Every section and every revealable element of the page has a fixed height,
//! so its vertical position can be computed from the content counts alone.
//! The views render with these same constants, which keeps what the observers
//! see and what is drawn in agreement.

use super::navigation::Section;
use super::reveal::Band;

pub const SECTION_PADDING: f32 = 64.0;
pub const SECTION_TITLE_HEIGHT: f32 = 72.0;
pub const ITEM_GAP: f32 = 24.0;

pub const HERO_HEIGHT: f32 = 640.0;

pub const ABOUT_TEXT_HEIGHT: f32 = 180.0;
pub const STATS_ROW_HEIGHT: f32 = 120.0;

pub const TIMELINE_ITEM_HEIGHT: f32 = 190.0;

pub const SKILL_TABS_HEIGHT: f32 = 48.0;
pub const SKILL_ROW_HEIGHT: f32 = 52.0;

pub const PROJECT_COLUMNS: usize = 2;
pub const PROJECT_CARD_HEIGHT: f32 = 250.0;

pub const CONTACT_CARD_HEIGHT: f32 = 84.0;
pub const CONTACT_FORM_HEIGHT: f32 = 440.0;

/// How many elements of each kind the page holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentCounts {
    pub timeline_items: usize,
    /// Row count of the longest skill category.
    pub skill_rows: usize,
    pub projects: usize,
    pub contact_cards: usize,
}

/// Height of `count` stacked items separated by [`ITEM_GAP`].
#[must_use]
pub fn stack_height(count: usize, item_height: f32) -> f32 {
    if count == 0 {
        0.0
    } else {
        count as f32 * item_height + (count - 1) as f32 * ITEM_GAP
    }
}

fn section_height(body: f32) -> f32 {
    SECTION_PADDING * 2.0 + SECTION_TITLE_HEIGHT + body
}

/// An element that fades in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Timeline(usize),
    SkillRow(usize),
    Project(usize),
    ContactCard(usize),
}

/// Positions of the page elements in scroll-content coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    sections: Vec<(Section, Band)>,
    stats: Band,
    timeline: Vec<Band>,
    skill_rows: Vec<Band>,
    project_cards: Vec<Band>,
    contact_cards: Vec<Band>,
    total_height: f32,
}

impl PageLayout {
    #[must_use]
    pub fn new(counts: ContentCounts) -> Self {
        let mut sections = Vec::with_capacity(Section::ALL.len());
        let mut top = 0.0;
        let mut stats = Band::new(0.0, 0.0);
        let mut timeline = Vec::new();
        let mut skill_rows = Vec::new();
        let mut project_cards = Vec::new();
        let mut contact_cards = Vec::new();

        for section in Section::ALL {
            let body_top = top + SECTION_PADDING + SECTION_TITLE_HEIGHT;
            let height = match section {
                Section::Home => HERO_HEIGHT,
                Section::About => {
                    stats = Band::new(body_top + ABOUT_TEXT_HEIGHT + ITEM_GAP, STATS_ROW_HEIGHT);
                    section_height(ABOUT_TEXT_HEIGHT + ITEM_GAP + STATS_ROW_HEIGHT)
                }
                Section::Experience => {
                    timeline = stacked_bands(body_top, counts.timeline_items, TIMELINE_ITEM_HEIGHT);
                    section_height(stack_height(counts.timeline_items, TIMELINE_ITEM_HEIGHT))
                }
                Section::Skills => {
                    let rows_top = body_top + SKILL_TABS_HEIGHT + ITEM_GAP;
                    skill_rows = stacked_bands(rows_top, counts.skill_rows, SKILL_ROW_HEIGHT);
                    section_height(
                        SKILL_TABS_HEIGHT
                            + ITEM_GAP
                            + stack_height(counts.skill_rows, SKILL_ROW_HEIGHT),
                    )
                }
                Section::Projects => {
                    let rows = counts.projects.div_ceil(PROJECT_COLUMNS);
                    let row_bands = stacked_bands(body_top, rows, PROJECT_CARD_HEIGHT);
                    project_cards = (0..counts.projects)
                        .map(|index| row_bands[index / PROJECT_COLUMNS])
                        .collect();
                    section_height(stack_height(rows, PROJECT_CARD_HEIGHT))
                }
                Section::Contact => {
                    contact_cards =
                        stacked_bands(body_top, counts.contact_cards, CONTACT_CARD_HEIGHT);
                    section_height(
                        stack_height(counts.contact_cards, CONTACT_CARD_HEIGHT)
                            .max(CONTACT_FORM_HEIGHT),
                    )
                }
            };
            sections.push((section, Band::new(top, height)));
            top += height;
        }

        Self {
            sections,
            stats,
            timeline,
            skill_rows,
            project_cards,
            contact_cards,
            total_height: top,
        }
    }

    #[must_use]
    pub fn section(&self, section: Section) -> Band {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, band)| *band)
            .unwrap_or(Band::new(0.0, 0.0))
    }

    pub fn sections(&self) -> impl Iterator<Item = (Section, Band)> + '_ {
        self.sections.iter().copied()
    }

    #[must_use]
    pub fn section_height(&self, section: Section) -> f32 {
        self.section(section).height
    }

    #[must_use]
    pub fn stats(&self) -> Band {
        self.stats
    }

    #[must_use]
    pub fn timeline(&self) -> &[Band] {
        &self.timeline
    }

    #[must_use]
    pub fn skill_rows(&self) -> &[Band] {
        &self.skill_rows
    }

    #[must_use]
    pub fn project_cards(&self) -> &[Band] {
        &self.project_cards
    }

    #[must_use]
    pub fn contact_cards(&self) -> &[Band] {
        &self.contact_cards
    }

    /// Every fade-in element with its band.
    #[must_use]
    pub fn fade_targets(&self) -> Vec<(PageItem, Band)> {
        let indexed = |bands: &[Band], item: fn(usize) -> PageItem| {
            bands
                .iter()
                .enumerate()
                .map(move |(i, band)| (item(i), *band))
                .collect::<Vec<_>>()
        };
        [
            indexed(&self.timeline, PageItem::Timeline),
            indexed(&self.skill_rows, PageItem::SkillRow),
            indexed(&self.project_cards, PageItem::Project),
            indexed(&self.contact_cards, PageItem::ContactCard),
        ]
        .concat()
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Largest scroll offset for a viewport of `viewport_height`.
    #[must_use]
    pub fn max_offset(&self, viewport_height: f32) -> f32 {
        (self.total_height - viewport_height).max(0.0)
    }
}

fn stacked_bands(top: f32, count: usize, height: f32) -> Vec<Band> {
    (0..count)
        .map(|index| Band::new(top + index as f32 * (height + ITEM_GAP), height))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> ContentCounts {
        ContentCounts {
            timeline_items: 3,
            skill_rows: 4,
            projects: 3,
            contact_cards: 3,
        }
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let layout = PageLayout::new(counts());
        let bands: Vec<(Section, Band)> = layout.sections().collect();

        assert_eq!(bands.len(), Section::ALL.len());
        assert_eq!(bands[0].1.top, 0.0);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].1.bottom(), pair[1].1.top);
        }
        assert_eq!(bands.last().map(|(_, b)| b.bottom()), Some(layout.total_height()));
    }

    #[test]
    fn elements_lie_inside_their_section() {
        let layout = PageLayout::new(counts());
        let inside = |band: Band, section: Section| {
            let outer = layout.section(section);
            band.top >= outer.top && band.bottom() <= outer.bottom()
        };

        assert!(inside(layout.stats(), Section::About));
        assert!(layout.timeline().iter().all(|b| inside(*b, Section::Experience)));
        assert!(layout.skill_rows().iter().all(|b| inside(*b, Section::Skills)));
        assert!(layout.project_cards().iter().all(|b| inside(*b, Section::Projects)));
        assert!(layout.contact_cards().iter().all(|b| inside(*b, Section::Contact)));
    }

    #[test]
    fn project_cards_share_rows() {
        let layout = PageLayout::new(counts());
        let cards = layout.project_cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0], cards[1]);
        assert!(cards[2].top > cards[1].top);
    }

    #[test]
    fn fade_targets_cover_every_item() {
        let layout = PageLayout::new(counts());
        let targets = layout.fade_targets();
        assert_eq!(targets.len(), 3 + 4 + 3 + 3);
        assert!(targets.contains(&(PageItem::SkillRow(3), layout.skill_rows()[3])));
        assert!(targets.contains(&(PageItem::Project(2), layout.project_cards()[2])));
    }

    #[test]
    fn stack_height_accounts_for_gaps() {
        assert_eq!(stack_height(0, 10.0), 0.0);
        assert_eq!(stack_height(1, 10.0), 10.0);
        assert_eq!(stack_height(3, 10.0), 30.0 + 2.0 * ITEM_GAP);
    }

    #[test]
    fn max_offset_never_negative() {
        let layout = PageLayout::new(ContentCounts::default());
        assert_eq!(layout.max_offset(f32::MAX), 0.0);
        assert!(layout.max_offset(100.0) > 0.0);
    }
}
