// SPDX-License-Identifier: MPL-2.0
//! Cancellable deadlines polled from the application tick.
//!
//! Every delayed UI transition (typing cadence, tab re-fill, simulated send,
//! notification dismissal) is a [`Timer`]: a single optional deadline plus a
//! generation counter. Re-arming a timer replaces its deadline and invalidates
//! every [`Ticket`] handed out before, so a completion that belongs to an older
//! arming can never be mistaken for the current one.

use std::time::{Duration, Instant};

/// Identifies one arming of a [`Timer`] or one run of an asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Hands out [`Ticket`]s and remembers which one is current.
#[derive(Debug, Default, Clone)]
pub struct TicketIssuer {
    generation: u64,
}

impl TicketIssuer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, invalidating all previously issued ones.
    pub fn issue(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }

    /// Invalidates all previously issued tickets without issuing a new one.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}

/// A single cancellable deadline.
#[derive(Debug, Default, Clone)]
pub struct Timer {
    deadline: Option<Instant>,
    issuer: TicketIssuer,
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the timer to fire `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> Ticket {
        self.deadline = Some(now + delay);
        self.issuer.issue()
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.issuer.invalidate();
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Schedules the next period of a repeating timer.
    ///
    /// The period starts at `fired_at`, the deadline that just passed, so a
    /// coarse tick never stretches it. When the tick is more than a whole
    /// period late the period starts at `now` instead, so a stalled window
    /// does not replay the missed steps in a burst.
    pub fn arm_after(&mut self, fired_at: Instant, now: Instant, delay: Duration) -> Ticket {
        let start = if now.saturating_duration_since(fired_at) > delay {
            now
        } else {
            fired_at
        };
        self.deadline = Some(start + delay);
        self.issuer.issue()
    }

    /// Time left before the deadline; zero once it has passed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        self.poll_due(now).is_some()
    }

    /// Like [`Timer::poll`], but yields the deadline that passed.
    pub fn poll_due(&mut self, now: Instant) -> Option<Instant> {
        let deadline = self.deadline.filter(|deadline| now >= *deadline)?;
        self.deadline = None;
        Some(deadline)
    }

    /// Whether `ticket` belongs to the latest arming of this timer.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issuer.is_current(ticket)
    }
}
