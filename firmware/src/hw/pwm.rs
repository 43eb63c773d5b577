// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fan PWM on TIM4 channel 1 (PD12), configured through PAC registers.
//!
//! The timer counts 0..=254, so a compare value of 255 holds the output high for the whole
//! period: duty values map one-to-one onto the 0..=255 fan scale. A duty of zero disables the
//! channel output rather than running at 0%.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use stm32f7xx_hal::{pac, rcc::Clocks};

const MAX_DUTY: u16 = 255;

pub struct FanPwm {
    tim: pac::TIM4,
}

impl FanPwm {
    /// Configure TIM4 CH1 in PWM mode 1 at roughly `freq_hz`, output disabled.
    pub fn tim4(tim4: pac::TIM4, clocks: &Clocks, freq_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        let tim = tim4;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        let counts = freq_hz * MAX_DUTY as u32;
        let psc = (clocks.timclk1().raw() / counts).max(1) - 1;
        tim.psc.write(|w| unsafe { w.bits(psc) });
        tim.arr.write(|w| unsafe { w.bits(MAX_DUTY as u32 - 1) });
        tim.ccr1.write(|w| unsafe { w.bits(0) });

        // CH1 output, PWM mode 1 (OC1M = 0b110), preload enabled
        tim.ccmr1_output()
            .modify(|r, w| unsafe { w.bits((r.bits() & !0xFF) | (0b110 << 4) | (1 << 3)) });

        // Buffered ARR, then latch PSC/ARR/CCR1 with an update event
        tim.cr1.modify(|_, w| w.arpe().set_bit());
        tim.egr.write(|w| w.ug().set_bit());

        // Active high, output off until the first non-zero duty
        tim.ccer.modify(|_, w| w.cc1p().clear_bit().cc1e().clear_bit());

        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }
}

impl ErrorType for FanPwm {
    type Error = Infallible;
}

impl SetDutyCycle for FanPwm {
    fn max_duty_cycle(&self) -> u16 {
        MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        let duty = duty.min(MAX_DUTY);
        self.tim.ccr1.write(|w| unsafe { w.bits(duty as u32) });
        self.tim.ccer.modify(|_, w| w.cc1e().bit(duty > 0));
        Ok(())
    }
}
