// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Temperature Sensing
//!
//! - [`sampler`] - Interrupt-fed exponential moving average over raw ADC readings.
//! - [`temperature`] - Raw reading to degrees Celsius.

pub mod sampler;
pub mod temperature;

pub use sampler::{ConversionTrigger, Sampler, SmoothedSample};
pub use temperature::{Calibration, Celsius};
