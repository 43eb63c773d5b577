// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ADC sampling pipeline.
//!
//! The main loop asks the ADC for a conversion through a [`ConversionTrigger`]. The ADC-complete
//! interrupt hands the raw result to [`SmoothedSample::process`], which folds it into a running
//! average with smoothing factor 1/4:
//!
//! ```text
//! acc = (raw >> 2) + acc - (acc >> 2)
//! ```
//!
//! Only one conversion may be in flight. The sampling period must exceed the conversion time.

use portable_atomic::{AtomicU16, Ordering};

/// Starts one ADC conversion. The result arrives later through the ADC interrupt.
pub trait ConversionTrigger {
    fn start_conversion(&mut self);
}

/// Smoothed ADC value shared between the ADC interrupt (writer) and the main loop (reader).
///
/// The accumulator is a single 16-bit atomic, so both sides access it without masking interrupts.
/// For a constant input it settles at `raw & !3`.
pub struct SmoothedSample {
    acc: AtomicU16,
}

impl SmoothedSample {
    pub const fn new() -> Self {
        Self {
            acc: AtomicU16::new(0),
        }
    }

    /// Fold one raw reading into the average. ADC interrupt only.
    #[inline]
    pub fn process(&self, raw: u16) {
        // A `reset` between load and store forces a retry from zero.
        let _ = self
            .acc
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |acc| {
                Some((raw >> 2).wrapping_add(acc - (acc >> 2)))
            });
    }

    /// Current smoothed value.
    #[inline]
    pub fn latest(&self) -> u16 {
        self.acc.load(Ordering::Relaxed)
    }

    /// Drop the average back to zero. Safe to call while the ADC interrupt is live: a sample
    /// being folded in at the same moment restarts from zero.
    pub fn reset(&self) {
        self.acc.store(0, Ordering::Relaxed);
    }
}

impl Default for SmoothedSample {
    fn default() -> Self {
        Self::new()
    }
}

/// Main-loop side of the pipeline: owns the trigger, reads the shared average.
pub struct Sampler<'a, T> {
    trigger: T,
    smoothed: &'a SmoothedSample,
}

impl<'a, T: ConversionTrigger> Sampler<'a, T> {
    pub fn new(trigger: T, smoothed: &'a SmoothedSample) -> Self {
        Self { trigger, smoothed }
    }

    /// Request a new reading.
    #[inline]
    pub fn start_conversion(&mut self) {
        self.trigger.start_conversion();
    }

    #[inline]
    pub fn latest(&self) -> u16 {
        self.smoothed.latest()
    }

    pub fn trigger(&mut self) -> &mut T {
        &mut self.trigger
    }

    pub fn free(self) -> T {
        self.trigger
    }
}
