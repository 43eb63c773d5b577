// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the fan controller.
//!
//! Everything is a plain `const` so a board crate can pick the defaults or build its own values.

use crate::control::{FanCurve, RegulatorConfig};
use crate::events::Ticks;
use crate::sensor::Calibration;

/// Periods of the scheduled events, all in base ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Base tick rate of the hardware timer interrupt.
    pub tick_hz: u32,
    /// Start an ADC conversion every `sample_period` ticks.
    pub sample_period: Ticks,
    /// Run the regulator every `regulate_period` ticks.
    pub regulate_period: Ticks,
    /// Status LED on event.
    pub led_on_period: Ticks,
    /// Status LED off event.
    pub led_off_period: Ticks,
}

impl Timing {
    /// 1 kHz tick: sample at 10 Hz, regulate at 1 Hz.
    pub const DEFAULT: Self = Self::at(1_000);

    /// Event periods for a timer running at `tick_hz`.
    ///
    /// Sample every 100 ms, regulate every second, light the LED every second and clear it every
    /// 1.1 s.
    pub const fn at(tick_hz: u32) -> Self {
        Self {
            tick_hz,
            sample_period: ms_to_ticks(tick_hz, 100),
            regulate_period: ms_to_ticks(tick_hz, 1_000),
            led_on_period: ms_to_ticks(tick_hz, 1_000),
            led_off_period: ms_to_ticks(tick_hz, 1_100),
        }
    }
}

/// Duration in milliseconds as whole ticks (rounded down, at least one).
pub const fn ms_to_ticks(tick_hz: u32, ms: u32) -> Ticks {
    let ticks = (ms as u64 * tick_hz as u64 / 1_000) as Ticks;
    if ticks == 0 {
        1
    } else {
        ticks
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete controller configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub timing: Timing,
    pub calibration: Calibration,
    pub curve: FanCurve,
    pub regulator: RegulatorConfig,
}

impl Config {
    pub const DEFAULT: Self = Self {
        timing: Timing::DEFAULT,
        calibration: Calibration::TMP35_X4,
        curve: FanCurve::DEFAULT,
        regulator: RegulatorConfig::DEFAULT,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// ADC input channel wired to the temperature sensor.
pub const ADC_CHANNEL: u8 = 3;

/// Fan PWM carrier frequency (4-wire fan standard).
pub const PWM_FREQUENCY_HZ: u32 = 25_000;

/// Duty written when the PWM is brought up, before the first regulation cycle.
pub const BOOT_DUTY: u8 = 128;

/// Number of slots in the event table.
pub const MAX_EVENTS: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_one_khz_board() {
        let t = Timing::DEFAULT;
        assert_eq!(t.tick_hz, 1_000);
        assert_eq!(t.sample_period, 100);
        assert_eq!(t.regulate_period, 1_000);
        assert_eq!(t.led_on_period, 1_000);
        assert_eq!(t.led_off_period, 1_100);
    }

    #[test]
    fn periods_scale_with_tick_rate() {
        let t = Timing::at(100);
        assert_eq!(t.sample_period, 10);
        assert_eq!(t.regulate_period, 100);
        assert_eq!(t.led_off_period, 110);
    }

    #[test]
    fn sub_tick_durations_round_up_to_one_tick() {
        assert_eq!(ms_to_ticks(100, 3), 1);
        assert_eq!(ms_to_ticks(100, 25), 2);

        let t = Timing::at(5);
        assert_eq!(t.sample_period, 1);
        assert_eq!(t.regulate_period, 5);
    }
}
