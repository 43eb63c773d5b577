// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hysteretic fan regulator.
//!
//! Runs once per regulation period with the current temperature and the duty the fan curve asks
//! for, and decides whether that duty is applied. A single noisy degree never triggers a full
//! response, and after a hot response the regulator holds for several cycles before it will
//! re-evaluate.
//!
//! ```text
//!  Init ──► Decay ──(settled)──► Next ──(rise > margin)──► Hot ──► HotNext ──(held)──► Next
//!                                  │                                  ▲  │
//!                                  └──────────► Cool ──► Next         └──┘ rising again
//! ```
//!
//! `last_temperature` only changes in `Init` and `Next`, so every `HotNext` cycle compares against
//! the temperature that triggered the hot response.

use crate::sensor::Celsius;

/// Regulator states.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegulatorState {
    /// Power-up. Spin the fan up and start settling.
    Init,
    /// Settling after power-up; temperature is ignored.
    Decay,
    /// Temperature rose past the margin; apply the curve immediately.
    Hot,
    /// Holding after a hot response until the temperature keeps falling.
    HotNext,
    /// Temperature did not justify a hot response; follow the curve.
    Cool,
    /// Decision point.
    Next,
}

/// Tuning of the hysteresis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegulatorConfig {
    /// Rise in °C over the last decision point that counts as "hot".
    pub hysteresis_margin: u8,
    /// Cycles spent in `Decay` after power-up.
    pub settle_cycles: i16,
    /// Countdown loaded on a hot response.
    pub hot_hold_cycles: i16,
    /// Duty applied at power-up.
    pub startup_duty: u8,
}

impl RegulatorConfig {
    pub const DEFAULT: Self = Self {
        hysteresis_margin: 3,
        settle_cycles: 5,
        hot_hold_cycles: 30,
        startup_duty: 255,
    };
}

impl Default for RegulatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub struct Regulator {
    config: RegulatorConfig,
    state: RegulatorState,
    decay: i16,
    last_temperature: Celsius,
}

impl Regulator {
    pub const fn new(config: RegulatorConfig) -> Self {
        Self {
            config,
            state: RegulatorState::Init,
            decay: 0,
            last_temperature: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> RegulatorState {
        self.state
    }

    /// Remaining `Decay`/`HotNext` countdown. May go negative in `HotNext`.
    #[inline]
    pub fn decay(&self) -> i16 {
        self.decay
    }

    /// Temperature recorded at the last decision point.
    #[inline]
    pub fn last_temperature(&self) -> Celsius {
        self.last_temperature
    }

    #[inline]
    pub fn config(&self) -> &RegulatorConfig {
        &self.config
    }

    /// Back to `Init`, as after power-up.
    pub fn reset(&mut self) {
        self.state = RegulatorState::Init;
        self.decay = 0;
        self.last_temperature = 0;
    }

    /// Run one regulation cycle.
    ///
    /// `duty` is what the fan curve maps `temperature` to. Returns the duty to drive the fan with,
    /// or `None` to leave the output as it is.
    pub fn step(&mut self, temperature: Celsius, duty: u8) -> Option<u8> {
        let mut output = None;

        let next = match self.state {
            RegulatorState::Init => {
                output = Some(self.config.startup_duty);
                self.decay = self.config.settle_cycles;
                self.last_temperature = temperature;
                RegulatorState::Decay
            }

            RegulatorState::Decay => {
                self.decay -= 1;
                if self.decay > 0 {
                    RegulatorState::Decay
                } else {
                    RegulatorState::Next
                }
            }

            RegulatorState::Hot => {
                self.decay = self.config.hot_hold_cycles;
                output = Some(duty);
                RegulatorState::HotNext
            }

            RegulatorState::HotNext => {
                if self.decay > 0 {
                    if temperature < self.last_temperature {
                        // Cooling down: hold the current duty, count down faster.
                        self.decay -= 1;
                    } else {
                        // Not cooling: let the duty follow the curve and restart the hold.
                        output = Some(duty);
                        self.decay = self.config.hot_hold_cycles;
                    }
                    self.decay -= 1;
                    RegulatorState::HotNext
                } else {
                    RegulatorState::Next
                }
            }

            RegulatorState::Cool => {
                output = Some(duty);
                RegulatorState::Next
            }

            RegulatorState::Next => {
                let threshold = self.last_temperature as u16 + self.config.hysteresis_margin as u16;
                self.last_temperature = temperature;
                if temperature as u16 > threshold {
                    RegulatorState::Hot
                } else {
                    RegulatorState::Cool
                }
            }
        };

        #[cfg(feature = "defmt")]
        {
            if next != self.state {
                defmt::debug!("regulator {} -> {} at {} C", self.state, next, temperature);
            }
        }

        self.state = next;
        output
    }
}

impl Default for Regulator {
    fn default() -> Self {
        Self::new(RegulatorConfig::DEFAULT)
    }
}
