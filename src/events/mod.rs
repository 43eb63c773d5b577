// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Periodic Events
//!
//! One hardware timer interrupt drives any number of software callbacks.
//!
//! ## Modules
//!
//! - [`ticker`] - Tick counter incremented from the timer interrupt.
//! - [`scheduler`] - Fixed-size table of periodic callbacks, dispatched from the main loop.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! static TICKS: Ticker = Ticker::new();
//!
//! // timer interrupt
//! TICKS.tick();
//!
//! // main loop
//! loop {
//!     scheduler.dispatch(TICKS.now(), &mut controller);
//! }
//! ```

pub mod scheduler;
pub mod ticker;

pub use scheduler::{Callback, EventId, EventTag, RegisterError, Scheduler, MAX_PERIOD};
pub use ticker::Ticker;

/// Tick count. Wraps after `u32::MAX` ticks (about 49 days at 1 kHz).
pub type Ticks = u32;
