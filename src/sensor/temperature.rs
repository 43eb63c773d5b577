// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Conversion from a raw ADC reading to degrees Celsius.
//!
//! The sensor is a TMP35 (10 mV/°C) behind an op-amp with a gain of 4, read by a 10-bit ADC with a
//! 5.0 V reference:
//!
//! ```text
//! Tc = (raw * 5.0 / 1024) / (5.0 / 125) = raw * 125 / 1024
//! ```
//!
//! Example: `raw = 712` gives 86.9 °C, truncated to 86.

/// Whole degrees Celsius.
pub type Celsius = u8;

/// Linear ADC-to-temperature transfer function `raw * numerator / denominator`.
///
/// The constant is specific to a board revision.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub numerator: u32,
    pub denominator: u32,
}

impl Calibration {
    /// TMP35 with a x4 amplifier and a 5 V ADC reference.
    pub const TMP35_X4: Self = Self {
        numerator: 125,
        denominator: 1024,
    };

    /// Convert a (smoothed) raw reading to whole degrees, truncating. Saturates at 255.
    pub fn to_celsius(&self, raw: u16) -> Celsius {
        let t = raw as u32 * self.numerator / self.denominator;
        t.min(Celsius::MAX as u32) as Celsius
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::TMP35_X4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_points() {
        let cal = Calibration::TMP35_X4;
        assert_eq!(cal.to_celsius(0), 0);
        assert_eq!(cal.to_celsius(454), 55);
        assert_eq!(cal.to_celsius(712), 86);
        assert_eq!(cal.to_celsius(1023), 124);
    }

    #[test]
    fn matches_floating_point_transfer_function() {
        let cal = Calibration::TMP35_X4;
        for raw in 0..=1023u16 {
            let expected = (raw as f64 * (5.0 / 1024.0) * 25.0) as u8;
            assert_eq!(cal.to_celsius(raw), expected, "raw {}", raw);
        }
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let cal = Calibration {
            numerator: 1,
            denominator: 1,
        };
        assert_eq!(cal.to_celsius(300), 255);
    }
}
