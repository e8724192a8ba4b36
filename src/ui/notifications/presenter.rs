// SPDX-License-Identifier: MPL-2.0
//! Single-slot notification lifecycle.
//!
//! At most one notification is visible. A new notification replaces the
//! current one and restarts the display timer; the timer armed for the
//! replaced notification can no longer hide its successor.

use super::notification::{Notification, NotificationId};
use crate::config::{DEFAULT_NOTIFICATION_DISPLAY_SECS, NOTIFICATION_SLIDE_MS};
use crate::domain::schedule::Timer;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss the notification with this ID, if it is still shown.
    Dismiss(NotificationId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone)]
struct Slot {
    notification: Notification,
    stage: Stage,
    since: Instant,
}

impl Slot {
    fn progress(&self, now: Instant) -> f32 {
        let t = (now.saturating_duration_since(self.since).as_secs_f32()
            / Presenter::SLIDE.as_secs_f32())
        .clamp(0.0, 1.0);
        match self.stage {
            Stage::Entering => t,
            Stage::Shown => 1.0,
            Stage::Leaving => 1.0 - t,
        }
    }

    /// Slides out from wherever the toast currently is.
    fn start_leaving(&mut self, now: Instant) {
        let hidden = Presenter::SLIDE.mul_f32(1.0 - self.progress(now));
        self.stage = Stage::Leaving;
        self.since = now.checked_sub(hidden).unwrap_or(now);
    }
}

/// Shows notifications one at a time.
#[derive(Debug, Clone)]
pub struct Presenter {
    current: Option<Slot>,
    display: Duration,
    hide_timer: Timer,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_NOTIFICATION_DISPLAY_SECS))
    }
}

impl Presenter {
    const SLIDE: Duration = Duration::from_millis(NOTIFICATION_SLIDE_MS);

    /// Creates a presenter keeping each notification visible for `display`.
    #[must_use]
    pub fn new(display: Duration) -> Self {
        Self {
            current: None,
            display,
            hide_timer: Timer::new(),
        }
    }

    /// Shows `notification`, replacing whatever is visible.
    pub fn notify(&mut self, notification: Notification, now: Instant) {
        tracing::debug!(
            key = notification.message_key(),
            severity = ?notification.severity(),
            "showing notification"
        );
        // A replacement arriving while the old toast is fully shown does not
        // slide again; only the text changes.
        let stage = match &self.current {
            Some(slot) if slot.stage == Stage::Shown => Stage::Shown,
            _ => Stage::Entering,
        };
        self.current = Some(Slot {
            notification,
            stage,
            since: now,
        });
        self.hide_timer.arm(now, self.display);
    }

    /// Starts hiding the visible notification.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        match &mut self.current {
            Some(slot) if slot.notification.id() == id && slot.stage != Stage::Leaving => {
                self.hide_timer.cancel();
                slot.start_leaving(now);
                true
            }
            _ => false,
        }
    }

    /// Advances timers and slide stages.
    pub fn tick(&mut self, now: Instant) {
        if self.hide_timer.poll(now) {
            if let Some(slot) = &mut self.current {
                slot.start_leaving(now);
            }
        }

        let Some(slot) = &mut self.current else {
            return;
        };
        let settled = now.saturating_duration_since(slot.since) >= Self::SLIDE;
        match slot.stage {
            Stage::Entering if settled => {
                slot.stage = Stage::Shown;
                slot.since = now;
            }
            Stage::Leaving if settled => self.current = None,
            _ => {}
        }
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// The notification on screen, including one sliding in or out.
    #[must_use]
    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().map(|slot| &slot.notification)
    }

    /// How far the toast is slid in: `0.0` hidden, `1.0` fully shown.
    #[must_use]
    pub fn slide_progress(&self, now: Instant) -> f32 {
        self.current
            .as_ref()
            .map_or(0.0, |slot| slot.progress(now))
    }

    /// Whether the toast is sliding and needs frame-rate ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|slot| slot.stage != Stage::Shown)
    }

    /// Whether anything is on screen or pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn presenter() -> Presenter {
        Presenter::new(Duration::from_secs(5))
    }

    #[test]
    fn new_presenter_is_empty() {
        let presenter = presenter();
        assert!(presenter.visible().is_none());
        assert!(!presenter.is_active());
        assert_eq!(presenter.slide_progress(Instant::now()), 0.0);
    }

    #[test]
    fn notification_slides_in_then_hides_after_display_duration() {
        let start = Instant::now();
        let mut presenter = presenter();
        presenter.notify(Notification::info("hello"), start);

        assert!(presenter.is_animating());
        let halfway = presenter.slide_progress(start + ms(150));
        assert!((halfway - 0.5).abs() < 1e-3, "{halfway}");

        presenter.tick(start + ms(300));
        assert!(!presenter.is_animating());
        assert_eq!(presenter.slide_progress(start + ms(300)), 1.0);

        presenter.tick(start + ms(4_999));
        assert!(presenter.visible().is_some());

        presenter.tick(start + ms(5_000));
        assert!(presenter.is_animating());
        assert!(presenter.visible().is_some());

        presenter.tick(start + ms(5_300));
        assert!(presenter.visible().is_none());
    }

    #[test]
    fn second_notification_replaces_first() {
        let start = Instant::now();
        let mut presenter = presenter();
        presenter.notify(Notification::info("first"), start);
        presenter.notify(Notification::success("second"), start + ms(100));

        assert_eq!(
            presenter.visible().map(Notification::message_key),
            Some("second")
        );
    }

    #[test]
    fn earlier_timer_cannot_hide_later_notification() {
        let start = Instant::now();
        let mut presenter = presenter();
        presenter.notify(Notification::info("first"), start);
        presenter.tick(start + ms(300));
        presenter.notify(Notification::info("second"), start + ms(3_000));

        // The first notification's five seconds are over.
        presenter.tick(start + ms(5_500));
        assert_eq!(presenter.slide_progress(start + ms(5_500)), 1.0);
        assert_eq!(
            presenter.visible().map(Notification::message_key),
            Some("second")
        );

        presenter.tick(start + ms(8_000));
        presenter.tick(start + ms(8_300));
        assert!(presenter.visible().is_none());
    }

    #[test]
    fn dismiss_starts_leaving_immediately() {
        let start = Instant::now();
        let mut presenter = presenter();
        let notification = Notification::error("oops");
        let id = notification.id();
        presenter.notify(notification, start);
        presenter.tick(start + ms(300));

        presenter.handle_message(&Message::Dismiss(id), start + ms(1_000));
        assert!(presenter.is_animating());
        presenter.tick(start + ms(1_300));
        assert!(presenter.visible().is_none());
    }

    #[test]
    fn dismiss_while_entering_slides_back_from_current_position() {
        let start = Instant::now();
        let mut presenter = presenter();
        let notification = Notification::info("careful");
        let id = notification.id();
        presenter.notify(notification, start);

        let entered = presenter.slide_progress(start + ms(90));
        assert!(presenter.dismiss(id, start + ms(90)));

        let leaving = presenter.slide_progress(start + ms(90));
        assert!((leaving - entered).abs() < 1e-3, "{entered} -> {leaving}");
        let later = presenter.slide_progress(start + ms(120));
        assert!(later < leaving, "{leaving} -> {later}");

        // Only the 90 ms already travelled are retraced.
        presenter.tick(start + ms(179));
        assert!(presenter.visible().is_some());
        presenter.tick(start + ms(181));
        assert!(presenter.visible().is_none());
    }

    #[test]
    fn dismissing_replaced_notification_is_ignored() {
        let start = Instant::now();
        let mut presenter = presenter();
        let first = Notification::info("first");
        let stale = first.id();
        presenter.notify(first, start);
        presenter.notify(Notification::info("second"), start + ms(10));

        assert!(!presenter.dismiss(stale, start + ms(20)));
        assert_eq!(
            presenter.visible().map(Notification::message_key),
            Some("second")
        );
    }
}
