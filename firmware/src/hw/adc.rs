// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-driven ADC1 sampling using direct PAC register access.
//!
//! The main loop only starts conversions ([`ConversionTrigger`]); the result is read in the `ADC`
//! interrupt with [`Adc1::take_result`] and folded into the shared moving average there.
//!
//! Example:
//! ```ignore
//! let mut adc = Adc1::new(dp.ADC1, ADC_CHANNEL);
//! adc.listen();
//! adc.start_conversion();
//!
//! #[interrupt]
//! fn ADC() {
//!     if let Some(raw) = Adc1::take_result() {
//!         SAMPLE.process(raw);
//!     }
//! }
//! ```

use stm32f7xx_hal::pac;

use fanctrl::sensor::ConversionTrigger;

/// ADC1 converting a single channel at 10-bit resolution.
pub struct Adc1 {
    adc: pac::ADC1,
}

impl Adc1 {
    /// Power up ADC1 for one regular conversion of `channel`, software triggered.
    pub fn new(adc: pac::ADC1, channel: u8) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        let common = unsafe { &*pac::ADC_COMMON::ptr() };
        // ADC clock: PCLK2 / 4
        common.ccr.modify(|_, w| w.adcpre().div4());

        // Power off to configure
        adc.cr2.modify(|_, w| w.adon().clear_bit());

        // 10-bit, right-aligned, single conversion, software trigger
        adc.cr1.modify(|_, w| w.res().bits(0b01));
        adc.cr2.modify(|_, w| {
            w.cont().clear_bit();
            w.align().right();
            w.exten().disabled();
            w
        });

        // Longest sample time; the sensor is slow and high-impedance
        adc.smpr2.modify(|_, w| unsafe { w.bits(0) });
        if channel <= 9 {
            let shift = 3 * channel as u32;
            adc.smpr2
                .modify(|r, w| unsafe { w.bits(r.bits() | (0b111 << shift)) });
        } else {
            let shift = 3 * (channel as u32 - 10);
            adc.smpr1
                .modify(|r, w| unsafe { w.bits(r.bits() | (0b111 << shift)) });
        }

        // Sequence length = 1 conversion
        adc.sqr1.modify(|_, w| w.l().bits(0));
        adc.sqr3.modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });

        // Power on
        adc.cr2.modify(|_, w| w.adon().set_bit());

        Self { adc }
    }

    /// Raise the `ADC` interrupt at end of conversion.
    pub fn listen(&mut self) {
        self.adc.cr1.modify(|_, w| w.eocie().set_bit());
    }

    /// Read the finished conversion, if any. Reading DR clears EOC.
    ///
    /// Meant for the `ADC` interrupt, which does not own the peripheral.
    pub fn take_result() -> Option<u16> {
        let adc = unsafe { &*pac::ADC1::ptr() };
        if adc.sr.read().eoc().bit_is_set() {
            Some(adc.dr.read().data().bits() & 0x3FF)
        } else {
            None
        }
    }
}

impl ConversionTrigger for Adc1 {
    fn start_conversion(&mut self) {
        self.adc.cr2.modify(|_, w| w.swstart().set_bit());
    }
}
