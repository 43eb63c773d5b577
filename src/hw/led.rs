// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Diagnostic status LED.
//!
//! Blinked by two scheduled events (on, then off a little later) so a glance at the board shows
//! the scheduler is alive. It has no part in the control loop.

use embedded_hal::digital::OutputPin;

/// Which pin level lights the LED on this board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

pub struct StatusLed<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    lit: bool,
}

impl<PIN: OutputPin> StatusLed<PIN> {
    /// Wrap `pin`, starting dark.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            lit: true,
        };
        led.set(false);
        led
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Light (`true`) or darken (`false`) the LED. Pin errors are ignored.
    pub fn set(&mut self, lit: bool) {
        let high = lit == (self.active == ActiveLevel::High);
        if high {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.lit = lit;
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct Pin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for Pin {
        type Error = Infallible;
    }

    impl OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn starts_dark() {
        let led = StatusLed::active_high(Pin::default());
        assert!(!led.is_lit());
        let pin = led.free();
        assert!(!pin.high);
        assert_eq!(pin.writes, 1);

        let led = StatusLed::active_low(Pin::default());
        assert!(led.free().high);
    }

    #[test]
    fn active_low_inverts_pin_level() {
        let mut led = StatusLed::active_low(Pin::default());
        led.on();
        assert!(led.is_lit());
        assert!(!led.pin.high);
        led.off();
        assert!(led.pin.high);
    }
}
