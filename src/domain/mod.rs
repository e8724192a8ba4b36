// SPDX-License-Identifier: MPL-2.0
//! Domain layer - the page's state machines, free of any GUI type.
//!
//! Everything here takes the current `Instant` as a parameter instead of
//! reading the clock, so each controller can be tested in isolation.
//!
//! # Modules
//!
//! - [`schedule`]: cancellable deadlines ([`Timer`](schedule::Timer), [`Ticket`](schedule::Ticket))
//! - [`typing`]: hero role typing animation
//! - [`reveal`]: visibility observer, counters and progress bars
//! - [`layout`]: fixed page geometry
//! - [`navigation`]: menu, active section and smooth scrolling
//! - [`tabs`]: skill category switcher
//! - [`contact`]: contact form validation and simulated send
//! - [`catalog`] / [`modal`]: project records and the details overlay
//! - [`resume`]: plain-text résumé generation and download

pub mod catalog;
pub mod contact;
pub mod layout;
pub mod modal;
pub mod navigation;
pub mod resume;
pub mod reveal;
pub mod schedule;
pub mod tabs;
pub mod typing;
