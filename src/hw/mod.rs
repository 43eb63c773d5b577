// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board-independent wrappers over `embedded-hal` traits.
//!
//! The register-level implementations of these traits live in the `firmware` crate.

pub mod fan;
pub mod led;

pub use fan::{FanDrive, PwmFan};
pub use led::{ActiveLevel, StatusLed};
