// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration and timing constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast display and slide durations
//! - **Typing**: Hero typing animation cadence
//! - **Reveal**: Visibility thresholds and counter/progress animation timing
//! - **Tabs**: Progress re-fill staging delays
//! - **Contact**: Form validation and simulated submission
//! - **Navigation**: Scroll offsets and layout breakpoints

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a notification stays on screen before sliding out (in seconds).
pub const DEFAULT_NOTIFICATION_DISPLAY_SECS: u64 = 5;

/// Minimum notification display time (in seconds).
pub const MIN_NOTIFICATION_DISPLAY_SECS: u64 = 1;

/// Maximum notification display time (in seconds).
pub const MAX_NOTIFICATION_DISPLAY_SECS: u64 = 30;

/// Duration of the slide-in and slide-out animations (in milliseconds).
pub const NOTIFICATION_SLIDE_MS: u64 = 300;

// ==========================================================================
// Typing Animation Defaults
// ==========================================================================

/// Delay between two typed characters (in milliseconds).
pub const TYPING_CHAR_MS: u64 = 100;

/// Delay between two deleted characters (in milliseconds).
pub const DELETING_CHAR_MS: u64 = 50;

/// Pause once a role title is fully displayed (in milliseconds).
pub const TYPING_PAUSE_FULL_MS: u64 = 2000;

/// Pause once a role title is fully erased (in milliseconds).
pub const TYPING_PAUSE_EMPTY_MS: u64 = 500;

// ==========================================================================
// Reveal Animation Defaults
// ==========================================================================

/// Visible fraction required before a fade-in target is revealed.
pub const FADE_THRESHOLD: f32 = 0.1;

/// Bottom margin shrinking the viewport for fade-in detection (in pixels).
pub const FADE_ROOT_MARGIN_BOTTOM: f32 = 50.0;

/// Visible fraction required before a counter starts ramping.
pub const COUNTER_THRESHOLD: f32 = 0.5;

/// Visible fraction required before a progress bar fills.
pub const PROGRESS_THRESHOLD: f32 = 0.5;

/// Total duration of a counter ramp (in milliseconds).
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Sampling interval of a counter ramp (in milliseconds).
pub const COUNTER_TICK_MS: u64 = 16;

/// Duration of the rendered width transition of progress bars (in milliseconds).
pub const PROGRESS_TRANSITION_MS: u64 = 600;

/// Fade of an element once it has scrolled into view (in milliseconds).
pub const FADE_IN_MS: u64 = 600;

// ==========================================================================
// Tab Switcher Defaults
// ==========================================================================

/// Delay before progress bars of a newly selected tab are reset (in milliseconds).
pub const TAB_RESET_DELAY_MS: u64 = 100;

/// Delay between the reset and the re-fill of progress bars (in milliseconds).
pub const TAB_REFILL_DELAY_MS: u64 = 100;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Default minimum message length in characters (0 disables the rule).
pub const DEFAULT_MIN_MESSAGE_LENGTH: usize = 10;

/// Default simulated submission latency (in milliseconds).
pub const DEFAULT_SEND_DELAY_MS: u64 = 2000;

/// Minimum simulated submission latency (in milliseconds).
pub const MIN_SEND_DELAY_MS: u64 = 1500;

/// Maximum simulated submission latency (in milliseconds).
pub const MAX_SEND_DELAY_MS: u64 = 2000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Scroll offset after which the header switches to its "scrolled" look (in pixels).
pub const HEADER_SCROLLED_OFFSET: f32 = 50.0;

/// Look-ahead applied when deciding which section is active (in pixels).
pub const ACTIVE_SECTION_LOOKAHEAD: f32 = 100.0;

/// Duration of the smooth scroll to an anchor (in milliseconds).
pub const SMOOTH_SCROLL_MS: u64 = 1000;

/// Window width below which the navigation collapses into a menu (in pixels).
pub const COMPACT_NAV_BREAKPOINT: f32 = 768.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Tick interval while a fine-grained animation is running (in milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Tick interval while only the typing animation is running (in milliseconds).
pub const IDLE_TICK_MS: u64 = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_display_default_is_within_bounds() {
        assert!(DEFAULT_NOTIFICATION_DISPLAY_SECS >= MIN_NOTIFICATION_DISPLAY_SECS);
        assert!(DEFAULT_NOTIFICATION_DISPLAY_SECS <= MAX_NOTIFICATION_DISPLAY_SECS);
    }

    #[test]
    fn send_delay_default_is_within_bounds() {
        assert!(DEFAULT_SEND_DELAY_MS >= MIN_SEND_DELAY_MS);
        assert!(DEFAULT_SEND_DELAY_MS <= MAX_SEND_DELAY_MS);
    }

    #[test]
    fn counter_ramp_has_whole_number_of_ticks() {
        assert_eq!(COUNTER_DURATION_MS % COUNTER_TICK_MS, 0);
    }

    #[test]
    fn idle_tick_is_fine_enough_for_deleting() {
        assert!(IDLE_TICK_MS <= DELETING_CHAR_MS);
    }
}
