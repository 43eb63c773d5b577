// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # fanctrl
//!
//! Board-independent core of the fan controller firmware: a tick-driven event scheduler and a
//! hysteretic thermal regulator that turns a temperature sensor reading into a fan duty cycle.
//!
//! The register-level board support lives in the separate `firmware/` crate. Everything here is
//! `no_std`, allocation-free, and runs unchanged on the host for testing.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Timing, calibration and tuning constants |
//! | [`events`] | Tick counter and periodic event scheduler |
//! | [`sensor`] | ADC sample smoothing and temperature conversion |
//! | [`control`] | Fan curve and hysteresis state machine |
//! | [`hw`] | `embedded-hal` based fan and status LED wrappers |
//! | [`controller`] | Ties everything together as scheduler callbacks |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Replay raw ADC readings through the mapping pipeline:
//!
//! ```bash
//! cargo run --bin replay
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod controller;
pub mod events;
pub mod hw;
pub mod sensor;

pub use controller::{FanController, Report};
