// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Register-level board support for the NUCLEO-F767ZI.

pub mod adc;
pub mod gpio;
pub mod pins;
pub mod pwm;
pub mod systick;
pub mod usart;

pub use adc::Adc1;
pub use gpio::LedPin;
pub use pins::BoardPins;
pub use pwm::FanPwm;
pub use usart::Telemetry;
