// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Temperature to fan duty mapping.
//!
//! The fan is off below `off_below` and at `ceiling` from `full_at` up. In between, the duty
//! follows a parabola with its vertex at `(off_below, floor)` passing through `(full_at, ceiling)`:
//!
//! ```text
//! duty = floor + (ceiling - floor) * (t - off_below)^2 / (full_at - off_below)^2
//! ```
//!
//! With the default points (50 °C, 153) and (100 °C, 255) this is `0.0408 * (t - 50)^2 + 153`.

use crate::sensor::Celsius;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FanCurve {
    /// Fan off below this temperature.
    pub off_below: Celsius,
    /// Fan at `ceiling` from this temperature up.
    pub full_at: Celsius,
    /// Duty at `off_below`, the lowest duty that reliably spins the fan.
    pub floor: u8,
    /// Maximum duty.
    pub ceiling: u8,
}

impl FanCurve {
    pub const DEFAULT: Self = Self {
        off_below: 50,
        full_at: 100,
        floor: 153,
        ceiling: 255,
    };

    /// Duty cycle (0-255) for a temperature. Monotonic non-decreasing in `t`.
    pub fn duty(&self, t: Celsius) -> u8 {
        if t < self.off_below {
            return 0;
        }
        if t >= self.full_at {
            return self.ceiling;
        }

        let d = (t - self.off_below) as u32;
        let span = (self.full_at - self.off_below) as u32;
        let rise = self.ceiling.saturating_sub(self.floor) as u32;

        (self.floor as u32 + rise * d * d / (span * span)) as u8
    }
}

impl Default for FanCurve {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_below_fifty() {
        let curve = FanCurve::DEFAULT;
        for t in 0..50 {
            assert_eq!(curve.duty(t), 0, "t = {}", t);
        }
    }

    #[test]
    fn saturates_from_one_hundred() {
        let curve = FanCurve::DEFAULT;
        for t in 100..=255 {
            assert_eq!(curve.duty(t), 255, "t = {}", t);
        }
    }

    #[test]
    fn monotonic_between_limits() {
        let curve = FanCurve::DEFAULT;
        assert_eq!(curve.duty(50), 153);
        for t in 50..100 {
            assert!(curve.duty(t + 1) >= curve.duty(t), "t = {}", t);
        }
        assert!(curve.duty(99) < 255);
    }

    #[test]
    fn matches_reference_parabola() {
        let curve = FanCurve::DEFAULT;
        for t in 50..100u8 {
            let d = (t - 50) as f64;
            let expected = (0.0408 * d * d + 153.0) as u8;
            assert_eq!(curve.duty(t), expected, "t = {}", t);
        }
        assert_eq!(curve.duty(86), 205);
    }
}
