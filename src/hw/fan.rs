// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fan actuator.
//!
//! The regulator talks to the fan through [`FanDrive`]: a duty byte where 0 switches the output
//! off entirely and 255 is full speed. [`PwmFan`] implements it on top of any `embedded-hal`
//! PWM channel.

use embedded_hal::pwm::SetDutyCycle;

/// Anything that can run the fan at a duty cycle.
pub trait FanDrive {
    /// Drive the fan at `duty`/255. Zero disables the output.
    fn set_duty_cycle(&mut self, duty: u8);
}

/// Fan on a PWM channel. Scales the duty byte to the channel's range.
pub struct PwmFan<P> {
    pwm: P,
    duty: u8,
}

impl<P: SetDutyCycle> PwmFan<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, duty: 0 }
    }

    /// Last duty written.
    #[inline]
    pub fn duty(&self) -> u8 {
        self.duty
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.duty > 0
    }

    pub fn free(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> FanDrive for PwmFan<P> {
    fn set_duty_cycle(&mut self, duty: u8) {
        let result = if duty == 0 {
            self.pwm.set_duty_cycle_fully_off()
        } else {
            self.pwm.set_duty_cycle_fraction(duty as u16, u8::MAX as u16)
        };
        // Keep running on the previous duty if the channel refuses.
        if result.is_ok() {
            self.duty = duty;
        }
    }
}
