// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Telemetry over the debug USART.
//!
//! One line per regulation cycle, e.g.
//!
//! ```text
//! adc=712 temp=86C speed=205 state=HotNext pwm=205
//! adc=712 temp=86C speed=205 state=HotNext pwm=-
//! ```
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt::{self, Write as _};
use nb::block;

use fanctrl::Report;
use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

/// Transmit-only telemetry port. Writes block until each byte is accepted.
pub struct Telemetry<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Telemetry<U> {
    /// Keep the TX half of a configured serial port; RX is unused.
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _) = serial.split();
        Self { tx }
    }

    /// One line of free text, CRLF-terminated.
    pub fn line(&mut self, text: &str) {
        let _ = write!(self, "{text}\r\n");
    }

    /// One regulation cycle.
    pub fn report(&mut self, r: &Report) {
        let _ = write!(
            self,
            "adc={} temp={}C speed={} state={:?} pwm=",
            r.raw, r.temperature, r.speed, r.state
        );
        let _ = match r.applied {
            Some(duty) => write!(self, "{duty}\r\n"),
            None => self.write_str("-\r\n"),
        };
    }
}

impl<U: Instance> fmt::Write for Telemetry<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.bytes()
            .try_for_each(|b| block!(self.tx.write(b)))
            .map_err(|_| fmt::Error)
    }
}
