// SPDX-License-Identifier: MPL-2.0
//! Navigation state: compact menu, header look, active section and smooth scrolling.

use super::layout::PageLayout;
use crate::config::{
    ACTIVE_SECTION_LOOKAHEAD, COMPACT_NAV_BREAKPOINT, HEADER_SCROLLED_OFFSET, SMOOTH_SCROLL_MS,
};
use std::time::{Duration, Instant};

/// Page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// i18n key of the navigation link.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Experience => "nav-experience",
            Section::Skills => "nav-skills",
            Section::Projects => "nav-projects",
            Section::Contact => "nav-contact",
        }
    }
}

/// Quadratic ease-in-out.
///
/// `t` is the elapsed time, `b` the start value, `c` the total change and
/// `d` the duration.
#[must_use]
pub fn ease_in_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// An in-flight animated scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started_at: now,
            duration: Duration::from_millis(SMOOTH_SCROLL_MS),
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return self.to;
        }
        ease_in_out_quad(
            elapsed.as_secs_f32(),
            self.from,
            self.to - self.from,
            self.duration.as_secs_f32(),
        )
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Navigation controller state.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    menu_open: bool,
    compact: bool,
    header_scrolled: bool,
    active: Option<Section>,
    scroll: Option<SmoothScroll>,
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Switches between full and compact navigation. Leaving compact mode closes the menu.
    pub fn set_window_width(&mut self, width: f32) {
        self.compact = width < COMPACT_NAV_BREAKPOINT;
        if !self.compact {
            self.menu_open = false;
        }
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn is_header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    #[must_use]
    pub fn active_section(&self) -> Option<Section> {
        self.active
    }

    /// Updates header look and active link for a new scroll offset.
    pub fn on_scroll(&mut self, offset: f32, layout: &PageLayout) {
        self.header_scrolled = offset > HEADER_SCROLLED_OFFSET;
        self.active = active_section_at(offset, layout);
    }

    /// Starts a smooth scroll to `section`. The menu closes.
    pub fn scroll_to(
        &mut self,
        section: Section,
        current_offset: f32,
        layout: &PageLayout,
        viewport_height: f32,
        now: Instant,
    ) {
        self.menu_open = false;
        let target = layout
            .section(section)
            .top
            .clamp(0.0, layout.max_offset(viewport_height));
        self.scroll = Some(SmoothScroll::new(current_offset, target, now));
    }

    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_some()
    }

    /// Offset the page should be at for `now`, while a smooth scroll runs.
    pub fn poll_scroll(&mut self, now: Instant) -> Option<f32> {
        let scroll = self.scroll?;
        let offset = scroll.offset_at(now);
        if scroll.is_finished(now) {
            self.scroll = None;
        }
        Some(offset)
    }

    pub fn cancel_scroll(&mut self) {
        self.scroll = None;
    }
}

/// The last section whose band contains `offset` plus the look-ahead.
#[must_use]
pub fn active_section_at(offset: f32, layout: &PageLayout) -> Option<Section> {
    let lookahead = offset + ACTIVE_SECTION_LOOKAHEAD;
    layout
        .sections()
        .filter(|(_, band)| band.contains(lookahead))
        .map(|(section, _)| section)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::ContentCounts;

    fn layout() -> PageLayout {
        PageLayout::new(ContentCounts {
            timeline_items: 2,
            skill_rows: 3,
            projects: 4,
            contact_cards: 3,
        })
    }

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0, 10.0, 100.0, 1.0), 10.0);
        assert!((ease_in_out_quad(0.5, 10.0, 100.0, 1.0) - 60.0).abs() < 1e-3);
        assert!((ease_in_out_quad(1.0, 10.0, 100.0, 1.0) - 110.0).abs() < 1e-3);
    }

    #[test]
    fn header_is_scrolled_past_threshold() {
        let layout = layout();
        let mut nav = Navigation::new();
        nav.on_scroll(50.0, &layout);
        assert!(!nav.is_header_scrolled());
        nav.on_scroll(51.0, &layout);
        assert!(nav.is_header_scrolled());
    }

    #[test]
    fn active_section_uses_lookahead() {
        let layout = layout();
        let about = layout.section(Section::About);

        assert_eq!(active_section_at(0.0, &layout), Some(Section::Home));
        assert_eq!(
            active_section_at(about.top - ACTIVE_SECTION_LOOKAHEAD, &layout),
            Some(Section::About)
        );
        assert_eq!(
            active_section_at(about.top - ACTIVE_SECTION_LOOKAHEAD - 1.0, &layout),
            Some(Section::Home)
        );
        assert_eq!(active_section_at(layout.total_height(), &layout), None);
    }

    #[test]
    fn link_choice_closes_menu_and_scrolls() {
        let layout = layout();
        let start = Instant::now();
        let mut nav = Navigation::new();
        nav.set_window_width(500.0);
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        nav.scroll_to(Section::Skills, 0.0, &layout, 700.0, start);
        assert!(!nav.is_menu_open());
        assert!(nav.is_scrolling());

        let target = layout.section(Section::Skills).top;
        let halfway = nav.poll_scroll(start + Duration::from_millis(500));
        assert!(halfway.is_some_and(|y| (y - target / 2.0).abs() < 1.0));

        assert_eq!(nav.poll_scroll(start + Duration::from_millis(1000)), Some(target));
        assert!(!nav.is_scrolling());
        assert_eq!(nav.poll_scroll(start + Duration::from_millis(1100)), None);
    }

    #[test]
    fn scroll_target_is_clamped_to_page() {
        let layout = layout();
        let mut nav = Navigation::new();
        let start = Instant::now();
        let viewport = 900.0;
        nav.scroll_to(Section::Contact, 0.0, &layout, viewport, start);

        let end = nav.poll_scroll(start + Duration::from_secs(2));
        assert_eq!(end, Some(layout.max_offset(viewport)));
    }

    #[test]
    fn compact_mode_follows_breakpoint() {
        let mut nav = Navigation::new();
        nav.set_window_width(767.0);
        assert!(nav.is_compact());
        nav.toggle_menu();
        nav.set_window_width(1024.0);
        assert!(!nav.is_compact());
        assert!(!nav.is_menu_open());
    }
}
