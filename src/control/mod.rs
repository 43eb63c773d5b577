// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control Algorithms
//!
//! This module turns a temperature into a fan duty cycle.
//!
//! ## Modules
//!
//! - [`fan_curve`] - Dead-zone plus parabolic temperature to duty mapping.
//! - [`regulator`] - Hysteresis state machine deciding when the mapped duty is applied.

pub mod fan_curve;
pub mod regulator;

pub use fan_curve::FanCurve;
pub use regulator::{Regulator, RegulatorConfig, RegulatorState};
