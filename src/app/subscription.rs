// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to the few the page reacts to (Escape and window
//! resizes), and a periodic tick drives every timer. The tick runs at frame
//! rate while something animates and slower otherwise; the typing animation
//! never stops, so some tick is always active.

use super::Message;
use crate::config::{ANIMATION_TICK_MS, IDLE_TICK_MS};
use iced::{event, keyboard, time, window, Event, Subscription};
use std::time::Duration;

/// Routes Escape presses and window resizes.
///
/// Escape is forwarded even when a widget captured it, so a focused text
/// input never keeps the modal open.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Tick interval for the current animation state.
#[must_use]
pub fn tick_interval(animating: bool) -> Duration {
    if animating {
        Duration::from_millis(ANIMATION_TICK_MS)
    } else {
        Duration::from_millis(IDLE_TICK_MS)
    }
}

/// Creates the periodic tick subscription.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    time::every(tick_interval(animating)).map(Message::Tick)
}
