// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The fan controller as a set of scheduler callbacks.
//!
//! [`FanController`] owns every piece of main-loop state: the sampler, the regulator, the fan and
//! the status LED. The scheduler hands it to each callback by `&mut`, so the only statics in the
//! firmware are the two values the interrupts write (tick counter and smoothed sample).
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut controller = FanController::new(adc, &SAMPLE, fan, led, Config::DEFAULT);
//! let mut scheduler: Scheduler<_, MAX_EVENTS> = Scheduler::new();
//! controller.register_events(&mut scheduler).unwrap();
//!
//! loop {
//!     scheduler.dispatch(TICKS.now(), &mut controller);
//! }
//! ```

use embedded_hal::digital::OutputPin;

use crate::config::{Config, Timing};
use crate::control::{FanCurve, Regulator, RegulatorState};
use crate::events::{EventTag, RegisterError, Scheduler};
use crate::hw::{FanDrive, StatusLed};
use crate::sensor::{Calibration, Celsius, ConversionTrigger, Sampler, SmoothedSample};

/// What one regulation cycle saw and did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    /// Smoothed ADC value the cycle worked from.
    pub raw: u16,
    pub temperature: Celsius,
    /// Duty the fan curve asked for.
    pub speed: u8,
    /// Duty written to the fan this cycle, if any.
    pub applied: Option<u8>,
    /// Regulator state after the cycle.
    pub state: RegulatorState,
}

pub struct FanController<'a, T, F, L: OutputPin> {
    sampler: Sampler<'a, T>,
    calibration: Calibration,
    curve: FanCurve,
    regulator: Regulator,
    timing: Timing,
    fan: F,
    led: StatusLed<L>,
    report: Option<Report>,
}

impl<'a, T, F, L> FanController<'a, T, F, L>
where
    T: ConversionTrigger,
    F: FanDrive,
    L: OutputPin,
{
    pub fn new(
        trigger: T,
        smoothed: &'a SmoothedSample,
        fan: F,
        led: StatusLed<L>,
        config: Config,
    ) -> Self {
        Self {
            sampler: Sampler::new(trigger, smoothed),
            calibration: config.calibration,
            curve: config.curve,
            regulator: Regulator::new(config.regulator),
            timing: config.timing,
            fan,
            led,
            report: None,
        }
    }

    /// Register the controller's periodic work.
    ///
    /// Order matters when several events fall on the same tick: regulation runs on the average
    /// before the conversion started in the same pass lands.
    pub fn register_events<const N: usize>(
        &self,
        scheduler: &mut Scheduler<Self, N>,
    ) -> Result<(), RegisterError> {
        let t = &self.timing;
        scheduler.register(Self::regulate, t.regulate_period, EventTag::NONE)?;
        scheduler.register(Self::start_conversion, t.sample_period, EventTag::NONE)?;
        scheduler.register(Self::led_on, t.led_on_period, EventTag::NONE)?;
        scheduler.register(Self::led_off, t.led_off_period, EventTag::NONE)?;
        Ok(())
    }

    /// Kick off an ADC conversion; the result arrives through the ADC interrupt.
    pub fn start_conversion(&mut self, _tag: EventTag) {
        self.sampler.start_conversion();
    }

    /// One regulation cycle: read, convert, map, run the hysteresis, drive the fan.
    pub fn regulate(&mut self, _tag: EventTag) {
        let raw = self.sampler.latest();
        let temperature = self.calibration.to_celsius(raw);
        let speed = self.curve.duty(temperature);

        let applied = self.regulator.step(temperature, speed);
        if let Some(duty) = applied {
            self.fan.set_duty_cycle(duty);
        }

        self.report = Some(Report {
            raw,
            temperature,
            speed,
            applied,
            state: self.regulator.state(),
        });
    }

    pub fn led_on(&mut self, _tag: EventTag) {
        self.led.on();
    }

    pub fn led_off(&mut self, _tag: EventTag) {
        self.led.off();
    }

    /// Report of the latest regulation cycle, once.
    pub fn take_report(&mut self) -> Option<Report> {
        self.report.take()
    }

    pub fn regulator(&self) -> &Regulator {
        &self.regulator
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn fan(&self) -> &F {
        &self.fan
    }

    pub fn led(&self) -> &StatusLed<L> {
        &self.led
    }

    pub fn sampler(&mut self) -> &mut Sampler<'a, T> {
        &mut self.sampler
    }
}
