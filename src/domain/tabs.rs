// SPDX-License-Identifier: MPL-2.0
//! Skill category tabs.
//!
//! Selecting a tab makes its category the only active one, then re-plays the
//! progress bars of that category in two staged steps: reset to zero, then
//! refill to the target.

use super::schedule::Timer;
use crate::config::{TAB_REFILL_DELAY_MS, TAB_RESET_DELAY_MS};
use std::time::{Duration, Instant};

/// Staged progress bar update requested by the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefillStep {
    /// Set every bar of the active category to 0 %.
    Reset,
    /// Set every bar of the active category back to its target.
    Refill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    Reset,
    Refill,
}

#[derive(Debug, Clone)]
pub struct TabSwitcher {
    count: usize,
    active: usize,
    pending: Pending,
    timer: Timer,
}

impl TabSwitcher {
    /// Creates a switcher over `count` tabs with the first one active.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count,
            active: 0,
            pending: Pending::Idle,
            timer: Timer::new(),
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        index == self.active && index < self.count
    }

    /// Activates `index` and schedules the re-fill.
    ///
    /// Out-of-range indices are ignored. A selection made while a previous
    /// re-fill is pending cancels it and starts over.
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        if index >= self.count {
            return false;
        }
        self.active = index;
        self.pending = Pending::Reset;
        self.timer
            .arm(now, Duration::from_millis(TAB_RESET_DELAY_MS));
        true
    }

    /// Returns the step that became due, if any.
    pub fn poll(&mut self, now: Instant) -> Option<RefillStep> {
        let fired_at = self.timer.poll_due(now)?;
        match self.pending {
            Pending::Reset => {
                self.pending = Pending::Refill;
                self.timer.arm_after(
                    fired_at,
                    now,
                    Duration::from_millis(TAB_REFILL_DELAY_MS),
                );
                Some(RefillStep::Reset)
            }
            Pending::Refill => {
                self.pending = Pending::Idle;
                Some(RefillStep::Refill)
            }
            Pending::Idle => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending != Pending::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn selection_is_a_singleton() {
        let mut tabs = TabSwitcher::new(3);
        assert!(tabs.is_active(0));

        tabs.select(2, Instant::now());
        let active: Vec<usize> = (0..3).filter(|i| tabs.is_active(*i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut tabs = TabSwitcher::new(2);
        assert!(!tabs.select(5, Instant::now()));
        assert_eq!(tabs.active(), 0);
        assert!(!tabs.is_pending());
    }

    #[test]
    fn refill_is_staged() {
        let start = Instant::now();
        let mut tabs = TabSwitcher::new(2);
        tabs.select(1, start);

        assert_eq!(tabs.poll(start + ms(50)), None);
        assert_eq!(tabs.poll(start + ms(100)), Some(RefillStep::Reset));
        assert_eq!(tabs.poll(start + ms(150)), None);
        assert_eq!(tabs.poll(start + ms(200)), Some(RefillStep::Refill));
        assert!(!tabs.is_pending());
        assert_eq!(tabs.poll(start + ms(400)), None);
    }

    #[test]
    fn reselecting_restarts_pending_phases() {
        let start = Instant::now();
        let mut tabs = TabSwitcher::new(3);
        tabs.select(1, start);
        assert_eq!(tabs.poll(start + ms(100)), Some(RefillStep::Reset));

        tabs.select(2, start + ms(150));
        assert_eq!(tabs.poll(start + ms(200)), None);
        assert_eq!(tabs.poll(start + ms(250)), Some(RefillStep::Reset));
        assert_eq!(tabs.poll(start + ms(350)), Some(RefillStep::Refill));
        assert_eq!(tabs.active(), 2);
    }

    #[test]
    fn refill_delay_holds_at_frame_rate() {
        let start = Instant::now();
        let tick = ms(16);
        let mut tabs = TabSwitcher::new(2);
        tabs.select(1, start);

        let mut steps = Vec::new();
        let mut now = start;
        while steps.len() < 2 {
            if let Some(step) = tabs.poll(now) {
                steps.push((step, now - start));
            }
            now += tick;
        }

        assert_eq!(steps[0], (RefillStep::Reset, ms(112)));
        assert_eq!(steps[1], (RefillStep::Refill, ms(208)));
    }
}
