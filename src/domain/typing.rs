// SPDX-License-Identifier: MPL-2.0
//! Typing animation for the hero role titles.
//!
//! The animator types a role one character at a time, pauses, erases it, pauses
//! again and moves on to the next role, forever. It can be driven two ways:
//! - [`TypingAnimator::poll`] from the application tick, using real deadlines;
//! - [`TypingAnimator::frames`], an infinite iterator of `(text, delay)` frames.

use super::schedule::Timer;
use crate::config::{
    DELETING_CHAR_MS, TYPING_CHAR_MS, TYPING_PAUSE_EMPTY_MS, TYPING_PAUSE_FULL_MS,
};
use std::time::{Duration, Instant};

/// Delays between animation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_char: Duration,
    pub delete_char: Duration,
    pub pause_full: Duration,
    pub pause_empty: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_char: Duration::from_millis(TYPING_CHAR_MS),
            delete_char: Duration::from_millis(DELETING_CHAR_MS),
            pause_full: Duration::from_millis(TYPING_PAUSE_FULL_MS),
            pause_empty: Duration::from_millis(TYPING_PAUSE_EMPTY_MS),
        }
    }
}

/// Where the animator is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

/// Position inside the role sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub role: usize,
    pub chars: usize,
    pub phase: Phase,
}

/// Pure typing state machine, independent of wall-clock time.
#[derive(Debug, Clone)]
pub struct TypingSequence {
    roles: Vec<Vec<char>>,
    cursor: Cursor,
    timings: TypingTimings,
}

impl TypingSequence {
    /// Creates a sequence over `roles`. Empty titles are skipped.
    #[must_use]
    pub fn new<S: AsRef<str>>(roles: &[S], timings: TypingTimings) -> Self {
        let roles = roles
            .iter()
            .map(|role| role.as_ref().chars().collect::<Vec<_>>())
            .filter(|chars| !chars.is_empty())
            .collect();
        Self {
            roles,
            cursor: Cursor {
                role: 0,
                chars: 0,
                phase: Phase::Typing,
            },
            timings,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Text currently shown.
    #[must_use]
    pub fn display(&self) -> String {
        self.roles
            .get(self.cursor.role)
            .map(|chars| chars[..self.cursor.chars].iter().collect())
            .unwrap_or_default()
    }

    /// Performs one step and returns the delay before the next one.
    ///
    /// Returns `None` when there is nothing to animate.
    pub fn step(&mut self) -> Option<Duration> {
        let len = self.roles.get(self.cursor.role)?.len();

        let delay = match self.cursor.phase {
            Phase::Typing | Phase::PausingEmpty => {
                self.cursor.chars += 1;
                if self.cursor.chars >= len {
                    self.cursor.phase = Phase::PausingFull;
                    self.timings.pause_full
                } else {
                    self.cursor.phase = Phase::Typing;
                    self.timings.type_char
                }
            }
            Phase::Deleting | Phase::PausingFull => {
                self.cursor.chars = self.cursor.chars.saturating_sub(1);
                if self.cursor.chars == 0 {
                    self.cursor.phase = Phase::PausingEmpty;
                    self.cursor.role = (self.cursor.role + 1) % self.roles.len();
                    self.timings.pause_empty
                } else {
                    self.cursor.phase = Phase::Deleting;
                    self.timings.delete_char
                }
            }
        };

        Some(delay)
    }
}

/// Infinite iterator of `(display text, delay until next frame)`.
///
/// Yields nothing when the sequence has no roles.
#[derive(Debug, Clone)]
pub struct Frames {
    sequence: TypingSequence,
}

impl Iterator for Frames {
    type Item = (String, Duration);

    fn next(&mut self) -> Option<Self::Item> {
        let delay = self.sequence.step()?;
        Some((self.sequence.display(), delay))
    }
}

/// Drives a [`TypingSequence`] from wall-clock ticks.
#[derive(Debug, Clone)]
pub struct TypingAnimator {
    sequence: TypingSequence,
    timer: Timer,
}

impl TypingAnimator {
    /// Creates an animator whose first character appears on the first poll.
    #[must_use]
    pub fn new<S: AsRef<str>>(roles: &[S], timings: TypingTimings, now: Instant) -> Self {
        let sequence = TypingSequence::new(roles, timings);
        let mut timer = Timer::new();
        if !sequence.is_empty() {
            timer.arm(now, Duration::ZERO);
        }
        Self { sequence, timer }
    }

    /// Advances at most one step. Returns `true` when the display changed.
    ///
    /// Step delays are measured between deadlines, not between polls, so the
    /// cadence holds whatever the tick interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(fired_at) = self.timer.poll_due(now) else {
            return false;
        };
        match self.sequence.step() {
            Some(delay) => {
                self.timer.arm_after(fired_at, now, delay);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn display(&self) -> String {
        self.sequence.display()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.sequence.cursor()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    /// Frames continuing from the current state.
    #[must_use]
    pub fn frames(&self) -> Frames {
        Frames {
            sequence: self.sequence.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<&'static str> {
        vec!["Data", "Cloud", "ETL"]
    }

    #[test]
    fn types_one_character_per_step() {
        let mut sequence = TypingSequence::new(&roles(), TypingTimings::default());
        assert_eq!(sequence.step(), Some(Duration::from_millis(100)));
        assert_eq!(sequence.display(), "D");
        sequence.step();
        assert_eq!(sequence.display(), "Da");
    }

    #[test]
    fn full_text_pauses_then_deletes() {
        let timings = TypingTimings::default();
        let mut frames = TypingSequence::new(&["Hi"], timings);

        assert_eq!(frames.step(), Some(timings.type_char));
        assert_eq!(frames.step(), Some(timings.pause_full));
        assert_eq!(frames.cursor().phase, Phase::PausingFull);
        assert_eq!(frames.display(), "Hi");

        assert_eq!(frames.step(), Some(timings.delete_char));
        assert_eq!(frames.display(), "H");
        assert_eq!(frames.step(), Some(timings.pause_empty));
        assert_eq!(frames.display(), "");
        assert_eq!(frames.cursor().phase, Phase::PausingEmpty);
    }

    #[test]
    fn cycles_through_every_role_and_wraps() {
        let roles = roles();
        let animator = TypingAnimator::new(&roles, TypingTimings::default(), Instant::now());

        let completed: Vec<String> = animator
            .frames()
            .filter(|(_, delay)| *delay == Duration::from_millis(TYPING_PAUSE_FULL_MS))
            .map(|(text, _)| text)
            .take(roles.len() + 1)
            .collect();

        assert_eq!(completed, vec!["Data", "Cloud", "ETL", "Data"]);
    }

    #[test]
    fn counts_unicode_scalar_values() {
        let mut sequence = TypingSequence::new(&["Résumé"], TypingTimings::default());
        sequence.step();
        sequence.step();
        assert_eq!(sequence.display(), "Ré");
    }

    #[test]
    fn empty_roles_yield_empty_display() {
        let mut animator =
            TypingAnimator::new::<&str>(&[], TypingTimings::default(), Instant::now());
        assert!(!animator.poll(Instant::now()));
        assert_eq!(animator.display(), "");
        assert_eq!(animator.frames().next(), None);
        assert!(!animator.is_running());
    }

    #[test]
    fn blank_titles_are_skipped() {
        let sequence = TypingSequence::new(&["", "A"], TypingTimings::default());
        let texts: Vec<String> = Frames { sequence }.take(1).map(|(t, _)| t).collect();
        assert_eq!(texts, vec!["A"]);
    }

    #[test]
    fn poll_respects_delays() {
        let start = Instant::now();
        let mut animator = TypingAnimator::new(&["Go"], TypingTimings::default(), start);

        assert!(animator.poll(start));
        assert_eq!(animator.display(), "G");
        assert!(!animator.poll(start + Duration::from_millis(99)));
        assert!(animator.poll(start + Duration::from_millis(100)));
        assert_eq!(animator.display(), "Go");
        assert!(!animator.poll(start + Duration::from_millis(1000)));
        assert!(animator.poll(start + Duration::from_millis(2100)));
        assert_eq!(animator.display(), "G");
    }

    #[test]
    fn frame_rate_ticks_keep_typing_cadence() {
        let start = Instant::now();
        let tick = Duration::from_millis(16);
        let mut animator = TypingAnimator::new(&["Senior Data Engineer"], TypingTimings::default(), start);

        let mut steps = Vec::new();
        let mut now = start;
        while steps.len() < 6 {
            if animator.poll(now) {
                steps.push(now - start);
            }
            now += tick;
        }

        for (k, at) in steps.iter().enumerate() {
            let due = Duration::from_millis(100) * k as u32;
            assert!(*at >= due && *at < due + tick, "step {k} at {at:?}");
        }
        assert_eq!(animator.display(), "Senior");
    }

    #[test]
    fn frame_rate_ticks_keep_deleting_cadence() {
        let start = Instant::now();
        let tick = Duration::from_millis(16);
        let timings = TypingTimings::default();
        let mut animator = TypingAnimator::new(&["Cloud"], timings, start);

        // Five typing steps, the full pause, then deletion starts.
        let first_delete = timings.type_char * 4 + timings.pause_full;
        let mut deletions = Vec::new();
        let mut now = start;
        while deletions.len() < 4 {
            let before = animator.display().chars().count();
            if animator.poll(now) && animator.display().chars().count() < before {
                deletions.push(now - start);
            }
            now += tick;
        }

        for (k, at) in deletions.iter().enumerate() {
            let due = first_delete + timings.delete_char * k as u32;
            assert!(*at >= due && *at < due + tick, "deletion {k} at {at:?}");
        }
    }
}
