// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SysTick as the scheduler's tick source.

use cortex_m::peripheral::{syst::SystClkSource, SYST};

/// Fire the `SysTick` exception `tick_hz` times per second from the core clock.
pub fn start(mut syst: SYST, sysclk_hz: u32, tick_hz: u32) -> SYST {
    syst.disable_counter();
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(sysclk_hz / tick_hz - 1);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();
    syst
}
