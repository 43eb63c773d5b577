// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Base tick counter shared between the timer interrupt and the main loop.

use portable_atomic::{AtomicU32, Ordering};

use super::Ticks;

/// Monotonic (wrapping) tick counter.
///
/// Lives in a `static` so the timer interrupt can reach it. The interrupt only calls [`tick`]; the
/// main loop only reads [`now`].
///
/// [`tick`]: Ticker::tick
/// [`now`]: Ticker::now
pub struct Ticker {
    count: AtomicU32,
}

impl Ticker {
    pub const fn new() -> Self {
        Self {
            count: AtomicU32::new(0),
        }
    }

    /// Record one timer interrupt. Interrupt context only.
    #[inline]
    pub fn tick(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Current tick count.
    #[inline]
    pub fn now(&self) -> Ticks {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks() {
        let ticker = Ticker::new();
        assert_eq!(ticker.now(), 0);
        for _ in 0..250 {
            ticker.tick();
        }
        assert_eq!(ticker.now(), 250);
    }

    #[test]
    fn wraps_instead_of_overflowing() {
        let ticker = Ticker {
            count: AtomicU32::new(u32::MAX),
        };
        ticker.tick();
        assert_eq!(ticker.now(), 0);
    }
}
