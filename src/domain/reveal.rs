// SPDX-License-Identifier: MPL-2.0
//! Visibility-triggered animations.
//!
//! A [`VisibilityObserver`] watches vertical bands of the page and reports the
//! keys whose visible fraction crossed a threshold for the current scroll
//! position. The animations it triggers live here too: the one-shot
//! [`CounterAnimation`] ramp and the [`ProgressBar`] width transition.

use crate::config::{
    COUNTER_DURATION_MS, COUNTER_TICK_MS, COUNTER_THRESHOLD, FADE_IN_MS,
    FADE_ROOT_MARGIN_BOTTOM, FADE_THRESHOLD, PROGRESS_THRESHOLD, PROGRESS_TRANSITION_MS,
};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::{Duration, Instant};

// =============================================================================
// Geometry
// =============================================================================

/// A vertical slice of the page, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f32,
    pub height: f32,
}

impl Band {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// The visible part of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageViewport {
    /// Scroll offset from the top of the page.
    pub offset: f32,
    /// Visible height.
    pub height: f32,
}

impl PageViewport {
    /// Band covered by the viewport, shrunk at the bottom by `margin_bottom`.
    #[must_use]
    pub fn root(&self, margin_bottom: f32) -> Band {
        Band::new(self.offset, self.height - margin_bottom)
    }
}

/// Fraction of `target` lying inside `root`, in `0.0..=1.0`.
///
/// A zero-height target counts as fully visible while its top is inside the root.
#[must_use]
pub fn intersection_ratio(target: Band, root: Band) -> f32 {
    if target.height <= 0.0 {
        return if target.top >= root.top && target.top <= root.bottom() {
            1.0
        } else {
            0.0
        };
    }
    let visible = target.bottom().min(root.bottom()) - target.top.max(root.top);
    (visible / target.height).clamp(0.0, 1.0)
}

// =============================================================================
// Observer
// =============================================================================

/// When a target counts as revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Visible fraction required.
    pub threshold: f32,
    /// Pixels removed from the bottom of the viewport.
    pub root_margin_bottom: f32,
    /// Stop observing a target after its first reveal.
    pub once: bool,
}

impl ObserverOptions {
    /// Fade-in of timeline items, cards and skill rows.
    #[must_use]
    pub fn fade_in() -> Self {
        Self {
            threshold: FADE_THRESHOLD,
            root_margin_bottom: FADE_ROOT_MARGIN_BOTTOM,
            once: false,
        }
    }

    /// Headline stat counters.
    #[must_use]
    pub fn counter() -> Self {
        Self {
            threshold: COUNTER_THRESHOLD,
            root_margin_bottom: 0.0,
            once: true,
        }
    }

    /// Skill progress bars.
    #[must_use]
    pub fn progress() -> Self {
        Self {
            threshold: PROGRESS_THRESHOLD,
            root_margin_bottom: 0.0,
            once: true,
        }
    }

    fn is_revealed(&self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// Watches keyed bands and reports reveals.
#[derive(Debug, Clone)]
pub struct VisibilityObserver<K> {
    options: ObserverOptions,
    targets: Vec<(K, Band)>,
    revealed: HashSet<K>,
}

impl<K: Copy + Eq + Hash> VisibilityObserver<K> {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: Vec::new(),
            revealed: HashSet::new(),
        }
    }

    /// Starts observing `key`, replacing its band if it was already observed.
    pub fn observe(&mut self, key: K, band: Band) {
        match self.targets.iter_mut().find(|(k, _)| *k == key) {
            Some(target) => target.1 = band,
            None => self.targets.push((key, band)),
        }
    }

    #[cfg(test)]
    fn is_observing(&self, key: K) -> bool {
        self.targets.iter().any(|(k, _)| *k == key)
    }

    /// Whether `key` has been revealed at least once.
    #[cfg(test)]
    fn is_revealed(&self, key: K) -> bool {
        self.revealed.contains(&key)
    }

    /// Checks every observed target against `viewport` and returns the keys
    /// revealed for the first time.
    pub fn poll(&mut self, viewport: PageViewport) -> Vec<K> {
        self.poll_where(viewport, |_| true)
    }

    /// Like [`poll`](Self::poll), skipping targets rejected by `on_screen`
    /// (for instance content of an inactive tab).
    pub fn poll_where(&mut self, viewport: PageViewport, on_screen: impl Fn(K) -> bool) -> Vec<K> {
        let root = viewport.root(self.options.root_margin_bottom);
        let options = self.options;

        let hits: Vec<K> = self
            .targets
            .iter()
            .filter(|(key, band)| {
                on_screen(*key) && options.is_revealed(intersection_ratio(*band, root))
            })
            .map(|(key, _)| *key)
            .collect();

        if options.once {
            self.targets.retain(|(key, _)| !hits.contains(key));
        }

        hits.into_iter()
            .filter(|key| self.revealed.insert(*key))
            .collect()
    }
}

// =============================================================================
// Fade-in
// =============================================================================

/// Opacity of revealed elements, rising linearly from the reveal instant.
#[derive(Debug, Clone)]
pub struct FadeIn<K> {
    started: HashMap<K, Instant>,
}

impl<K> Default for FadeIn<K> {
    fn default() -> Self {
        Self {
            started: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> FadeIn<K> {
    const DURATION: Duration = Duration::from_millis(FADE_IN_MS);

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts fading `key` in. A key that already started keeps its instant.
    pub fn start(&mut self, key: K, now: Instant) {
        self.started.entry(key).or_insert(now);
    }

    /// Opacity of `key`: `0.0` before its reveal, `1.0` once faded in.
    #[must_use]
    pub fn alpha(&self, key: K, now: Instant) -> f32 {
        self.started.get(&key).map_or(0.0, |&at| {
            (now.saturating_duration_since(at).as_secs_f32() / Self::DURATION.as_secs_f32())
                .min(1.0)
        })
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .values()
            .any(|&at| now.saturating_duration_since(at) < Self::DURATION)
    }
}

// =============================================================================
// Counter
// =============================================================================

/// Count-up from zero to a target.
///
/// The value after `k` ticks of 16 ms is `k * target / 125` floored, and
/// snaps to the exact target once the ramp is complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    started_at: Option<Instant>,
}

impl CounterAnimation {
    const TICKS: u64 = COUNTER_DURATION_MS / COUNTER_TICK_MS;

    #[must_use]
    pub fn new(target: u64) -> Self {
        Self {
            target,
            started_at: None,
        }
    }

    /// Starts the ramp. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    fn ticks(&self, now: Instant) -> Option<u64> {
        let started_at = self.started_at?;
        let elapsed = now.saturating_duration_since(started_at).as_millis();
        Some(u64::try_from(elapsed / u128::from(COUNTER_TICK_MS)).unwrap_or(u64::MAX))
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> u64 {
        match self.ticks(now) {
            None => 0,
            Some(ticks) if ticks >= Self::TICKS => self.target,
            Some(ticks) => {
                let value = u128::from(ticks) * u128::from(self.target) / u128::from(Self::TICKS);
                u64::try_from(value).unwrap_or(self.target).min(self.target)
            }
        }
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        matches!(self.ticks(now), Some(ticks) if ticks < Self::TICKS)
    }
}

// =============================================================================
// Progress Bar
// =============================================================================

/// A skill bar whose width moves linearly towards the last value set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBar {
    target: f32,
    from: f32,
    to: f32,
    changed_at: Option<Instant>,
}

impl ProgressBar {
    const TRANSITION: Duration = Duration::from_millis(PROGRESS_TRANSITION_MS);

    /// Creates an empty bar that fills up to `target` percent.
    #[must_use]
    pub fn new(target: f32) -> Self {
        Self {
            target: target.clamp(0.0, 100.0),
            from: 0.0,
            to: 0.0,
            changed_at: None,
        }
    }

    /// Width the bar is heading to.
    #[cfg(test)]
    fn width(&self) -> f32 {
        self.to
    }

    /// Sets the width, starting a transition from the currently rendered width.
    pub fn set_width(&mut self, percent: f32, now: Instant) {
        self.from = self.rendered_width(now);
        self.to = percent.clamp(0.0, 100.0);
        self.changed_at = Some(now);
    }

    pub fn fill(&mut self, now: Instant) {
        self.set_width(self.target, now);
    }

    pub fn reset(&mut self, now: Instant) {
        self.set_width(0.0, now);
    }

    /// Width as currently drawn, in percent.
    #[must_use]
    pub fn rendered_width(&self, now: Instant) -> f32 {
        let Some(changed_at) = self.changed_at else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(changed_at);
        if elapsed >= Self::TRANSITION {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / Self::TRANSITION.as_secs_f32();
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.changed_at
            .is_some_and(|at| now.saturating_duration_since(at) < Self::TRANSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn intersection_ratio_of_partially_visible_band() {
        let root = Band::new(0.0, 100.0);
        assert_eq!(intersection_ratio(Band::new(50.0, 100.0), root), 0.5);
        assert_eq!(intersection_ratio(Band::new(200.0, 100.0), root), 0.0);
        assert_eq!(intersection_ratio(Band::new(10.0, 20.0), root), 1.0);
    }

    #[test]
    fn root_margin_shrinks_viewport() {
        let viewport = PageViewport {
            offset: 0.0,
            height: 600.0,
        };
        let mut observer = VisibilityObserver::new(ObserverOptions::fade_in());
        // 20px of the band is inside the raw viewport but below the 50px margin.
        observer.observe(1, Band::new(580.0, 100.0));
        assert!(observer.poll(viewport).is_empty());

        observer.observe(2, Band::new(530.0, 100.0));
        assert_eq!(observer.poll(viewport), vec![2]);
    }

    #[test]
    fn fade_targets_keep_being_observed() {
        let mut observer = VisibilityObserver::new(ObserverOptions::fade_in());
        observer.observe("card", Band::new(0.0, 100.0));
        let viewport = PageViewport {
            offset: 0.0,
            height: 500.0,
        };

        assert_eq!(observer.poll(viewport), vec!["card"]);
        assert!(observer.poll(viewport).is_empty());
        assert!(observer.is_observing("card"));
        assert!(observer.is_revealed("card"));
    }

    #[test]
    fn once_targets_stop_being_observed() {
        let mut observer = VisibilityObserver::new(ObserverOptions::counter());
        observer.observe(0, Band::new(100.0, 100.0));

        let far = PageViewport {
            offset: 1000.0,
            height: 500.0,
        };
        assert!(observer.poll(far).is_empty());
        assert!(observer.is_observing(0));

        // Only 40% visible: below the counter threshold.
        let partial = PageViewport {
            offset: 160.0,
            height: 500.0,
        };
        assert!(observer.poll(partial).is_empty());

        let near = PageViewport {
            offset: 0.0,
            height: 500.0,
        };
        assert_eq!(observer.poll(near), vec![0]);
        assert!(!observer.is_observing(0));
    }

    #[test]
    fn poll_where_skips_offscreen_targets() {
        let mut observer = VisibilityObserver::new(ObserverOptions::progress());
        observer.observe((0, 0), Band::new(0.0, 10.0));
        observer.observe((1, 0), Band::new(0.0, 10.0));
        let viewport = PageViewport {
            offset: 0.0,
            height: 500.0,
        };

        assert_eq!(observer.poll_where(viewport, |(cat, _)| cat == 1), vec![(1, 0)]);
        assert!(observer.is_observing((0, 0)));
    }

    #[test]
    fn fade_in_rises_once_started() {
        let start = Instant::now();
        let mut fade = FadeIn::new();
        assert_eq!(fade.alpha(1, start), 0.0);

        fade.start(1, start);
        fade.start(1, start + ms(300));
        assert!((fade.alpha(1, start + ms(300)) - 0.5).abs() < 1e-3);
        assert!(fade.is_animating(start + ms(300)));
        assert_eq!(fade.alpha(1, start + ms(900)), 1.0);
        assert!(!fade.is_animating(start + ms(900)));
    }

    #[test]
    fn counter_ramps_and_snaps_to_target() {
        let start = Instant::now();
        let mut counter = CounterAnimation::new(250);
        assert_eq!(counter.value_at(start + ms(500)), 0);

        counter.start(start);
        assert_eq!(counter.value_at(start), 0);
        // 10 ticks: 10 * 250 / 125
        assert_eq!(counter.value_at(start + ms(160)), 20);
        assert!(counter.is_running(start + ms(160)));
        assert_eq!(counter.value_at(start + ms(2000)), 250);
        assert!(!counter.is_running(start + ms(2000)));
        assert_eq!(counter.value_at(start + ms(9000)), 250);
    }

    #[test]
    fn counter_floors_intermediate_values() {
        let start = Instant::now();
        let mut counter = CounterAnimation::new(7);
        counter.start(start);
        // 20 ticks: 20 * 7 / 125 = 1.12
        assert_eq!(counter.value_at(start + ms(320)), 1);
    }

    #[test]
    fn counter_start_is_idempotent() {
        let start = Instant::now();
        let mut counter = CounterAnimation::new(100);
        counter.start(start);
        counter.start(start + ms(1000));
        assert_eq!(counter.value_at(start + ms(2000)), 100);
    }

    #[test]
    fn progress_bar_transitions_linearly() {
        let start = Instant::now();
        let mut bar = ProgressBar::new(90.0);
        assert_eq!(bar.rendered_width(start), 0.0);

        bar.fill(start);
        assert_eq!(bar.width(), 90.0);
        assert!((bar.rendered_width(start + ms(300)) - 45.0).abs() < 0.5);
        assert_eq!(bar.rendered_width(start + ms(600)), 90.0);
        assert!(!bar.is_animating(start + ms(600)));
    }

    #[test]
    fn progress_bar_reset_starts_from_rendered_width() {
        let start = Instant::now();
        let mut bar = ProgressBar::new(80.0);
        bar.fill(start);
        bar.reset(start + ms(600));
        assert_eq!(bar.width(), 0.0);
        assert!((bar.rendered_width(start + ms(900)) - 40.0).abs() < 0.5);
    }
}
