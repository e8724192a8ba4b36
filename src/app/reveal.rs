// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered animations of the page.
//!
//! Binds the generic observers of [`crate::domain::reveal`] to the concrete
//! page: every fade-in element, the headline stats row and each skill row of
//! each category. Skill bars are keyed by `(category, row)` and only the
//! active category counts as on screen.

use crate::content::SiteContent;
use crate::domain::layout::{PageItem, PageLayout};
use crate::domain::reveal::{
    CounterAnimation, FadeIn, ObserverOptions, PageViewport, ProgressBar, VisibilityObserver,
};
use crate::domain::tabs::RefillStep;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct PageReveal {
    fade_observer: VisibilityObserver<PageItem>,
    fade_in: FadeIn<PageItem>,
    counter_observer: VisibilityObserver<usize>,
    counters: Vec<CounterAnimation>,
    progress_observer: VisibilityObserver<(usize, usize)>,
    progress: Vec<Vec<ProgressBar>>,
}

impl PageReveal {
    /// Registers every animated element of `content` at its place in `layout`.
    #[must_use]
    pub fn new(content: &SiteContent, layout: &PageLayout) -> Self {
        let mut fade_observer = VisibilityObserver::new(ObserverOptions::fade_in());
        for (item, band) in layout.fade_targets() {
            fade_observer.observe(item, band);
        }

        let mut counter_observer = VisibilityObserver::new(ObserverOptions::counter());
        for index in 0..content.stats.len() {
            counter_observer.observe(index, layout.stats());
        }
        let counters = content
            .stats
            .iter()
            .map(|stat| CounterAnimation::new(stat.target))
            .collect();

        let mut progress_observer = VisibilityObserver::new(ObserverOptions::progress());
        let mut progress = Vec::with_capacity(content.skills.len());
        for (category, skills) in content.skills.iter().enumerate() {
            let mut bars = Vec::with_capacity(skills.skills.len());
            for (row, skill) in skills.skills.iter().enumerate() {
                if let Some(band) = layout.skill_rows().get(row) {
                    progress_observer.observe((category, row), *band);
                }
                bars.push(ProgressBar::new(skill.level));
            }
            progress.push(bars);
        }

        Self {
            fade_observer,
            fade_in: FadeIn::new(),
            counter_observer,
            counters,
            progress_observer,
            progress,
        }
    }

    /// Starts the animations of targets `viewport` reveals for the first time.
    pub fn on_scroll(&mut self, viewport: PageViewport, active_category: usize, now: Instant) {
        for item in self.fade_observer.poll(viewport) {
            self.fade_in.start(item, now);
        }

        for index in self.counter_observer.poll(viewport) {
            if let Some(counter) = self.counters.get_mut(index) {
                counter.start(now);
            }
        }

        let revealed = self
            .progress_observer
            .poll_where(viewport, |(category, _)| category == active_category);
        for (category, row) in revealed {
            if let Some(bar) = self.progress.get_mut(category).and_then(|bars| bars.get_mut(row)) {
                bar.fill(now);
            }
        }
    }

    /// Applies a staged tab re-fill to every bar of `category`.
    pub fn apply_refill(&mut self, step: RefillStep, category: usize, now: Instant) {
        let Some(bars) = self.progress.get_mut(category) else {
            return;
        };
        for bar in bars {
            match step {
                RefillStep::Reset => bar.reset(now),
                RefillStep::Refill => bar.fill(now),
            }
        }
    }

    #[must_use]
    pub fn alpha(&self, item: PageItem, now: Instant) -> f32 {
        self.fade_in.alpha(item, now)
    }

    /// Opacity of `count` consecutive items built by `item`.
    #[must_use]
    pub fn alphas(&self, count: usize, item: fn(usize) -> PageItem, now: Instant) -> Vec<f32> {
        (0..count).map(|i| self.alpha(item(i), now)).collect()
    }

    #[must_use]
    pub fn counter_values(&self, now: Instant) -> Vec<u64> {
        self.counters.iter().map(|c| c.value_at(now)).collect()
    }

    /// Rendered widths of the bars of `category`, in percent.
    #[must_use]
    pub fn widths(&self, category: usize, now: Instant) -> Vec<f32> {
        self.progress
            .get(category)
            .map(|bars| bars.iter().map(|bar| bar.rendered_width(now)).collect())
            .unwrap_or_default()
    }

    /// Whether any reveal animation still needs frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.fade_in.is_animating(now)
            || self.counters.iter().any(|c| c.is_running(now))
            || self
                .progress
                .iter()
                .flatten()
                .any(|bar| bar.is_animating(now))
    }
}
